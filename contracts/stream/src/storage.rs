use soroban_sdk::Env;

use crate::errors::StreamError;
use crate::types::{Config, DataKey, PaymentAsset, Stream};

// Ledger counts used when bumping entry lifetimes.
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = 17280;
pub(crate) const INSTANCE_TTL_EXTEND_TO: u32 = 120960;
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
pub(crate) const PERSISTENT_TTL_EXTEND_TO: u32 = 120960;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, StreamError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StreamError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

// ---------------------------------------------------------------------------
// Stream registry
// ---------------------------------------------------------------------------

pub fn get_last_stream_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LastStreamId)
        .unwrap_or(0u64)
}

/// Reserves the next stream id. Ids start at 1 and are never reused.
pub fn next_stream_id(env: &Env) -> u64 {
    let stream_id = get_last_stream_id(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::LastStreamId, &stream_id);
    stream_id
}

pub fn load_stream(env: &Env, stream_id: u64) -> Result<Stream, StreamError> {
    env.storage()
        .persistent()
        .get(&DataKey::Stream(stream_id))
        .ok_or(StreamError::StreamNotFound)
}

pub fn save_stream(env: &Env, stream: &Stream) {
    let key = DataKey::Stream(stream.id);
    env.storage().persistent().set(&key, stream);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn remove_stream(env: &Env, stream: &Stream) {
    env.storage()
        .persistent()
        .remove(&DataKey::Stream(stream.id));
    env.storage()
        .persistent()
        .remove(&DataKey::StreamByNft(stream.nft_nonce));
}

pub fn index_stream_nft(env: &Env, stream: &Stream) {
    let key = DataKey::StreamByNft(stream.nft_nonce);
    env.storage().persistent().set(&key, &stream.id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn stream_id_by_nft(env: &Env, nft_nonce: u64) -> Result<u64, StreamError> {
    env.storage()
        .persistent()
        .get(&DataKey::StreamByNft(nft_nonce))
        .ok_or(StreamError::StreamNotFound)
}

// ---------------------------------------------------------------------------
// Protocol fee table
// ---------------------------------------------------------------------------

pub fn get_protocol_fee(env: &Env, asset: &PaymentAsset) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::ProtocolFee(asset.clone()))
}

pub fn set_protocol_fee(env: &Env, asset: &PaymentAsset, fee_bps: u32) {
    let key = DataKey::ProtocolFee(asset.clone());
    env.storage().persistent().set(&key, &fee_bps);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn remove_protocol_fee(env: &Env, asset: &PaymentAsset) {
    env.storage()
        .persistent()
        .remove(&DataKey::ProtocolFee(asset.clone()));
}
