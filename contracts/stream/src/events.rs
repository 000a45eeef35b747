use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{PaymentAsset, Stream, StreamEvent};

pub fn stream_created(env: &Env, stream: &Stream, recipient: &Address, gross_deposit: i128) {
    env.events().publish(
        (symbol_short!("created"), stream.id),
        (
            StreamEvent::Created(stream.id, stream.deposit, gross_deposit),
            stream.sender.clone(),
            recipient.clone(),
        ),
    );
}

pub fn stream_claimed(env: &Env, stream_id: u64, amount: i128, to: &Address) {
    env.events().publish(
        (symbol_short!("claimed"), stream_id),
        (StreamEvent::Claimed(stream_id, amount), to.clone()),
    );
}

pub fn stream_cancelled(env: &Env, stream_id: u64, cancelled_by: &Address, streamed: i128) {
    env.events().publish(
        (symbol_short!("cancelled"), stream_id),
        (StreamEvent::Cancelled(stream_id, streamed), cancelled_by.clone()),
    );
}

pub fn stream_finished(env: &Env, stream_id: u64) {
    env.events().publish(
        (symbol_short!("finished"), stream_id),
        StreamEvent::Finished(stream_id),
    );
}

pub fn cancel_renounced(env: &Env, stream_id: u64) {
    env.events().publish(
        (symbol_short!("renounced"), stream_id),
        StreamEvent::CancelRenounced(stream_id),
    );
}

pub fn protocol_fee_set(env: &Env, asset: &PaymentAsset, fee_bps: u32) {
    env.events()
        .publish((symbol_short!("fee_set"),), (asset.clone(), fee_bps));
}

pub fn protocol_fee_removed(env: &Env, asset: &PaymentAsset) {
    env.events()
        .publish((symbol_short!("fee_rm"),), asset.clone());
}

pub fn stream_nft_transferred(env: &Env, nonce: u64, from: &Address, to: &Address) {
    env.events().publish(
        (symbol_short!("nft_xfer"), nonce),
        (from.clone(), to.clone()),
    );
}

pub fn admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("admin"), symbol_short!("updated")),
        (old_admin.clone(), new_admin.clone()),
    );
}

pub fn fee_collector_updated(env: &Env, collector: &Address) {
    env.events().publish(
        (symbol_short!("collector"), symbol_short!("updated")),
        collector.clone(),
    );
}
