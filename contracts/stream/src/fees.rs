use crate::errors::StreamError;
use crate::fixed_point::mul_div_floor;
use crate::types::BrokerFee;

/// Basis points making up 100%.
pub const BPS_SCALE: u32 = 10_000;

/// Brokers may take at most 10% of a deposit.
pub const MAX_BROKER_FEE_BPS: u32 = 1_000;

/// Outcome of charging fees on a gross deposit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeBreakdown {
    pub protocol_fee: i128,
    pub broker_fee: i128,
    /// What remains for the stream.
    pub net_deposit: i128,
}

/// `amount * fee_bps / BPS_SCALE`, truncated. `amount` must be non-negative
/// and `fee_bps <= BPS_SCALE`.
pub fn fee_of(amount: i128, fee_bps: u32) -> i128 {
    mul_div_floor(amount as u128, fee_bps as u128, BPS_SCALE as u128) as i128
}

/// Rejects values that cannot be stored in the protocol fee table. A zero
/// fee is expressed by removing the entry, never by storing 0.
pub fn validate_protocol_fee(fee_bps: u32) -> Result<(), StreamError> {
    if fee_bps == 0 {
        return Err(StreamError::ProtocolFeeZero);
    }
    if fee_bps > BPS_SCALE {
        return Err(StreamError::ProtocolFeeTooBig);
    }
    Ok(())
}

/// Splits `gross` into protocol fee, broker fee and net deposit. Both fees
/// are taken from the gross amount.
pub fn apply_fees(
    gross: i128,
    protocol_fee_bps: Option<u32>,
    broker: Option<&BrokerFee>,
) -> Result<FeeBreakdown, StreamError> {
    if gross <= 0 {
        return Err(StreamError::ZeroDeposit);
    }

    let broker_fee = match broker {
        Some(broker) if broker.fee_bps > MAX_BROKER_FEE_BPS => {
            return Err(StreamError::BrokerFeeTooBig);
        }
        Some(broker) => fee_of(gross, broker.fee_bps),
        None => 0,
    };
    let protocol_fee = protocol_fee_bps
        .map(|fee_bps| fee_of(gross, fee_bps.min(BPS_SCALE)))
        .unwrap_or(0);

    let net_deposit = gross - protocol_fee - broker_fee;
    if net_deposit <= 0 {
        return Err(StreamError::ZeroDeposit);
    }

    Ok(FeeBreakdown {
        protocol_fee,
        broker_fee,
        net_deposit,
    })
}
