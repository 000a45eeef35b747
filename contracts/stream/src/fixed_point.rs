//! Unsigned 18-decimal fixed-point arithmetic used by the vesting curves.
//!
//! Every routine rounds in a documented direction so that callers can bound
//! the error of a composed computation. Values handled here are fractions in
//! `[0, SCALE]`, which keeps every intermediate product below `2^120`.

/// `1.0` in fixed-point representation.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Bisection steps for `root_floor`; `SCALE < 2^60`.
const ROOT_SEARCH_STEPS: u32 = 61;

/// Returns `floor(a * b / c)` without a 256-bit intermediate. Requires
/// `b, c < 2^64` and a result that fits in `u128`.
pub fn mul_div_floor(a: u128, b: u128, c: u128) -> u128 {
    debug_assert!(c > 0);
    (a / c) * b + (a % c) * b / c
}

/// `floor(x * y)` for fractions.
fn mul_floor(x: u128, y: u128) -> u128 {
    x * y / SCALE
}

/// `ceil(x * y)` for fractions.
fn mul_ceil(x: u128, y: u128) -> u128 {
    (x * y).div_ceil(SCALE)
}

/// Returns the fraction `numerator / denominator`, rounded down.
/// Requires `numerator <= denominator`.
pub fn ratio_floor(numerator: u64, denominator: u64) -> u128 {
    mul_div_floor(numerator as u128, SCALE, denominator as u128).min(SCALE)
}

fn pow_with(base: u128, exp: u32, mul: fn(u128, u128) -> u128) -> u128 {
    let mut result = SCALE;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(result, base);
        }
        exp >>= 1;
        if exp > 0 {
            base = mul(base, base);
        }
    }
    result
}

/// `base ^ exp`, never above the exact value.
pub fn pow_floor(base: u128, exp: u32) -> u128 {
    pow_with(base, exp, mul_floor)
}

/// `base ^ exp`, never below the exact value.
pub fn pow_ceil(base: u128, exp: u32) -> u128 {
    pow_with(base, exp, mul_ceil)
}

/// Largest `y` with `pow_ceil(y, n) <= x`. Since `pow_ceil` over-estimates,
/// the exact `y ^ n` is also `<= x`, so the result never exceeds the true
/// n-th root of `x`.
pub fn root_floor(x: u128, n: u32) -> u128 {
    if n == 1 || x == 0 {
        return x;
    }
    if x >= SCALE {
        return SCALE;
    }

    let mut lo = 0u128;
    let mut hi = SCALE;
    for _ in 0..ROOT_SEARCH_STEPS {
        if lo >= hi {
            break;
        }
        let mid = lo + (hi - lo + 1) / 2;
        if pow_ceil(mid, n) <= x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `(numerator / denominator) ^ (exp_numerator / exp_denominator)` as a
/// fraction, never above the exact value and non-decreasing in `numerator`.
///
/// The exponent is reduced first, so equivalent exponents agree. The root is
/// taken before the power: a root of a fraction never shrinks it, which keeps
/// the intermediate clear of the `1 / SCALE` floor.
pub fn rational_pow_floor(
    numerator: u64,
    denominator: u64,
    exp_numerator: u32,
    exp_denominator: u32,
) -> u128 {
    let divisor = gcd(exp_numerator, exp_denominator).max(1);
    let ratio = ratio_floor(numerator, denominator);
    pow_floor(
        root_floor(ratio, exp_denominator / divisor),
        exp_numerator / divisor,
    )
}
