use crate::accrual::calculate_vested_amount;
use crate::errors::StreamError;
use crate::ownership::Role;
use crate::types::{CancelBalances, Stream, StreamStatus};

/// Lifecycle status of a live stream at `now`.
pub fn status_at(stream: &Stream, now: u64) -> StreamStatus {
    if stream.is_cancelled() {
        StreamStatus::Cancelled
    } else if now < stream.start_time {
        StreamStatus::Pending
    } else if now < stream.end_time {
        StreamStatus::InProgress
    } else {
        StreamStatus::Settled
    }
}

/// Pending and in-progress streams can still be cancelled or renounced.
pub fn is_warm(stream: &Stream, now: u64) -> bool {
    matches!(
        status_at(stream, now),
        StreamStatus::Pending | StreamStatus::InProgress
    )
}

/// Cancellation and renouncing both require a cancellable stream that has
/// neither ended nor already been cancelled.
pub fn require_cancellable(stream: &Stream, now: u64) -> Result<(), StreamError> {
    if !stream.can_cancel || !is_warm(stream, now) {
        return Err(StreamError::CantCancel);
    }
    Ok(())
}

/// Splits the remaining deposit at `now`: vested but unclaimed funds belong to
/// the recipient, unvested funds return to the sender.
pub fn split_at(stream: &Stream, now: u64) -> CancelBalances {
    let vested = calculate_vested_amount(stream, now);
    CancelBalances {
        sender_balance: stream.deposit - vested,
        recipient_balance: vested - stream.claimed_amount,
    }
}

/// Recipient's withdrawable amount at `now`.
pub fn recipient_balance_at(stream: &Stream, now: u64) -> i128 {
    match stream.cancel_balances() {
        Some(balances) => balances.recipient_balance,
        None => calculate_vested_amount(stream, now) - stream.claimed_amount,
    }
}

/// Amount that would return to the sender if the stream ended at `now`.
pub fn sender_balance_at(stream: &Stream, now: u64) -> i128 {
    match stream.cancel_balances() {
        Some(balances) => balances.sender_balance,
        None => stream.deposit - calculate_vested_amount(stream, now),
    }
}

/// Takes `role`'s recorded share out of `balances`, leaving zero behind.
pub fn withdraw_share(balances: &mut CancelBalances, role: Role) -> Result<i128, StreamError> {
    let share = match role {
        Role::Sender => &mut balances.sender_balance,
        Role::Recipient => &mut balances.recipient_balance,
    };
    if *share <= 0 {
        return Err(StreamError::ZeroClaim);
    }
    let amount = *share;
    *share = 0;
    Ok(amount)
}

pub fn is_settled(balances: &CancelBalances) -> bool {
    balances.sender_balance == 0 && balances.recipient_balance == 0
}
