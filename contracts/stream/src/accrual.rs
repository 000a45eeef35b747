use crate::fixed_point::{mul_div_floor, rational_pow_floor, SCALE};
use crate::types::{Segment, Stream};

/// Total amount vested by `stream` at ledger time `now`.
///
/// - Before `start_time + cliff`: 0.
/// - At or after `end_time`: exactly `deposit`, which absorbs the rounding
///   shortfall accumulated by the partial segments.
/// - In between: completed segments count in full, the segment in progress
///   counts `floor(amount * (elapsed / duration) ^ exponent)`.
///
/// The result is non-decreasing in `now` and never exceeds `deposit`.
pub fn calculate_vested_amount(stream: &Stream, now: u64) -> i128 {
    if now < stream.start_time.saturating_add(stream.cliff) {
        return 0;
    }
    if now >= stream.end_time {
        return stream.deposit;
    }

    let mut segment_start = stream.start_time;
    let mut vested: u128 = 0;
    for segment in stream.segments.iter() {
        let segment_end = segment_start.saturating_add(segment.duration);
        if now >= segment_end {
            vested += segment.amount as u128;
            segment_start = segment_end;
            continue;
        }

        vested += segment_vested_amount(&segment, now - segment_start);
        break;
    }

    (vested as i128).min(stream.deposit)
}

/// Amount of a single segment vested after `elapsed` seconds, with
/// `elapsed < segment.duration`.
fn segment_vested_amount(segment: &Segment, elapsed: u64) -> u128 {
    if elapsed == 0 {
        return 0;
    }

    let amount = segment.amount as u128;
    let duration = segment.duration as u128;
    if segment.exponent.is_linear() {
        return mul_div_floor(amount, elapsed as u128, duration);
    }

    let fraction = rational_pow_floor(
        elapsed,
        segment.duration,
        segment.exponent.numerator,
        segment.exponent.denominator,
    );
    mul_div_floor(amount, fraction, SCALE)
}
