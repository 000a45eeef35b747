//! Ownership tokens and role resolution.
//!
//! Every stream has exactly one ownership token unit, serial `nft_nonce`.
//! Whoever holds that unit is the stream's recipient; the stream record
//! never stores a recipient address. Roles are therefore resolved on every
//! call from the caller's identity and the unit it presents.

use soroban_sdk::{Address, Env};

use crate::errors::StreamError;
use crate::storage::{PERSISTENT_TTL_EXTEND_TO, PERSISTENT_TTL_THRESHOLD};
use crate::types::{Config, DataKey, Stream, StreamAttributes, StreamNft};

/// Authority a caller holds over a stream for the current call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Sender,
    Recipient,
}

// ---------------------------------------------------------------------------
// Role resolution
// ---------------------------------------------------------------------------

fn presents_stream_nft(
    env: &Env,
    config: &Config,
    stream: &Stream,
    caller: &Address,
    nft: &StreamNft,
) -> bool {
    nft.token == config.nft_token
        && nft.nonce == stream.nft_nonce
        && nft.amount == 1
        && owner_of(env, stream.nft_nonce).as_ref() == Some(caller)
}

/// Resolves the caller's role. A presented unit must be exactly one unit of
/// this stream's token held by the caller; without one, only the sender is
/// recognised. `caller` must already be authenticated.
pub fn resolve_role(
    env: &Env,
    config: &Config,
    stream: &Stream,
    caller: &Address,
    nft: &Option<StreamNft>,
) -> Result<Role, StreamError> {
    match nft {
        Some(nft) if presents_stream_nft(env, config, stream, caller, nft) => {
            Ok(Role::Recipient)
        }
        Some(_) => Err(StreamError::InvalidRole),
        None if *caller == stream.sender => Ok(Role::Sender),
        None => Err(StreamError::InvalidRole),
    }
}

pub fn require_recipient(
    env: &Env,
    config: &Config,
    stream: &Stream,
    caller: &Address,
    nft: &StreamNft,
) -> Result<(), StreamError> {
    if presents_stream_nft(env, config, stream, caller, nft) {
        Ok(())
    } else {
        Err(StreamError::InvalidRole)
    }
}

pub fn require_sender(stream: &Stream, caller: &Address) -> Result<(), StreamError> {
    if *caller == stream.sender {
        Ok(())
    } else {
        Err(StreamError::OnlySenderCanRenounce)
    }
}

// ---------------------------------------------------------------------------
// Token ledger
// ---------------------------------------------------------------------------

pub fn owner_of(env: &Env, nonce: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::NftOwner(nonce))
}

fn set_owner(env: &Env, nonce: u64, owner: &Address) {
    let key = DataKey::NftOwner(nonce);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn balance_of(env: &Env, holder: &Address, nonce: u64) -> i128 {
    match owner_of(env, nonce) {
        Some(owner) if owner == *holder => 1,
        _ => 0,
    }
}

pub fn attributes_of(env: &Env, nonce: u64) -> Result<StreamAttributes, StreamError> {
    env.storage()
        .persistent()
        .get(&DataKey::NftAttributes(nonce))
        .ok_or(StreamError::StreamNotFound)
}

fn attributes(stream: &Stream) -> StreamAttributes {
    StreamAttributes {
        sender: stream.sender.clone(),
        payment_asset: stream.payment_asset.clone(),
        deposit: stream.deposit,
        remaining_balance: stream.remaining_balance(),
        can_cancel: stream.can_cancel,
        start_time: stream.start_time,
        end_time: stream.end_time,
        cliff: stream.cliff,
        is_cancelled: stream.is_cancelled(),
    }
}

/// Rewrites the token attributes from the current stream record.
pub fn refresh_attributes(env: &Env, stream: &Stream) {
    let key = DataKey::NftAttributes(stream.nft_nonce);
    env.storage().persistent().set(&key, &attributes(stream));
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

pub fn mint(env: &Env, stream: &Stream, to: &Address) {
    set_owner(env, stream.nft_nonce, to);
    refresh_attributes(env, stream);
}

pub fn burn(env: &Env, nonce: u64) {
    env.storage().persistent().remove(&DataKey::NftOwner(nonce));
    env.storage()
        .persistent()
        .remove(&DataKey::NftAttributes(nonce));
}

/// Moves the unit at `nonce` from `from` to `to`, and with it the recipient
/// rights over the stream. `from` must already be authenticated.
pub fn transfer(env: &Env, from: &Address, to: &Address, nonce: u64) -> Result<(), StreamError> {
    if owner_of(env, nonce).as_ref() != Some(from) {
        return Err(StreamError::NftNotOwned);
    }
    set_owner(env, nonce, to);
    Ok(())
}
