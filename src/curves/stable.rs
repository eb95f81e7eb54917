//! Stable-swap pricing for pegged-asset pairs.
//!
//! The invariant is `k = x·y·(x² + y²)` — flat near 1:1 and increasingly
//! constant-product-like away from the peg. Both sides are first normalized
//! to a common unit of 1e8 (`value · 1e8 / scale`), priced at that
//! precision, and denormalized afterward, so tokens with different decimal
//! counts trade at parity.
//!
//! Intermediates reach `x³·y` at 1e8 precision, which exceeds `u128`; the
//! math runs on [`U256`] with every operation checked. The solver
//! [`get_y`] is the reference Newton iteration over the invariant, and its
//! integer truncation behavior — including the `+1` step when approaching
//! the root from below and the termination on a step of one unit — is
//! load-bearing: it decides real token amounts and must not be "improved".

use primitive_types::U256;

use crate::error::AmmError;

/// Common normalization unit: all curve math runs at 1e8 precision.
pub const PRECISION: u128 = 100_000_000;

/// Iteration cap for the Newton solver.
const MAX_ITERATIONS: u32 = 255;

/// Normalizes `value` from its own `scale` to the common 1e8 unit.
fn to_common_units(value: u128, scale: u64) -> Result<U256, AmmError> {
    if scale == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let widened = U256::from(value)
        .checked_mul(U256::from(PRECISION))
        .ok_or(AmmError::Overflow("stable normalization overflow"))?;
    Ok(widened / U256::from(scale))
}

/// Narrows a `U256` back to `u128`.
fn to_u128(value: U256) -> Result<u128, AmmError> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::ConversionOverflow);
    }
    Ok(value.low_u128())
}

/// `f(y) = x0·y³ + y·x0³`, the invariant expression at fixed `x0`.
fn f(x0: U256, y: U256) -> Result<U256, AmmError> {
    let y3 = y
        .checked_mul(y)
        .and_then(|v| v.checked_mul(y))
        .ok_or(AmmError::Overflow("stable invariant: y^3 overflow"))?;
    let x3 = x0
        .checked_mul(x0)
        .and_then(|v| v.checked_mul(x0))
        .ok_or(AmmError::Overflow("stable invariant: x0^3 overflow"))?;
    let a = x0
        .checked_mul(y3)
        .ok_or(AmmError::Overflow("stable invariant: x0·y^3 overflow"))?;
    let b = y
        .checked_mul(x3)
        .ok_or(AmmError::Overflow("stable invariant: y·x0^3 overflow"))?;
    a.checked_add(b)
        .ok_or(AmmError::Overflow("stable invariant sum overflow"))
}

/// `f'(y) = 3·x0·y² + x0³`, the derivative the Newton step divides by.
fn derivative(x0: U256, y: U256) -> Result<U256, AmmError> {
    let y2 = y
        .checked_mul(y)
        .ok_or(AmmError::Overflow("stable derivative: y^2 overflow"))?;
    let lhs = U256::from(3u8)
        .checked_mul(x0)
        .and_then(|v| v.checked_mul(y2))
        .ok_or(AmmError::Overflow("stable derivative: 3·x0·y^2 overflow"))?;
    let x3 = x0
        .checked_mul(x0)
        .and_then(|v| v.checked_mul(x0))
        .ok_or(AmmError::Overflow("stable derivative: x0^3 overflow"))?;
    lhs.checked_add(x3)
        .ok_or(AmmError::Overflow("stable derivative sum overflow"))
}

/// Solves `f(y) = k` for `y` at fixed `x0`, starting from `y_guess`.
///
/// Newton iteration with integer steps. When the current value sits below
/// the target the step is rounded up by one unit (approach from below must
/// not stall); termination is a step of at most one unit or the iteration
/// cap, whichever comes first. On cap exhaustion the last iterate is
/// returned, matching the reference behavior.
fn get_y(x0: U256, k: U256, y_guess: U256) -> Result<U256, AmmError> {
    let one = U256::one();
    let mut y = y_guess;

    let mut i = 0;
    while i < MAX_ITERATIONS {
        let current = f(x0, y)?;
        let slope = derivative(x0, y)?;
        if slope.is_zero() {
            return Err(AmmError::DivisionByZero);
        }

        let dy = if current < k {
            let step = ((k - current) / slope)
                .checked_add(one)
                .ok_or(AmmError::Overflow("stable solver step overflow"))?;
            y = y
                .checked_add(step)
                .ok_or(AmmError::Overflow("stable solver iterate overflow"))?;
            step
        } else {
            let step = (current - k) / slope;
            y = y
                .checked_sub(step)
                .ok_or(AmmError::Unreachable("stable solver stepped below zero"))?;
            step
        };

        if dy <= one {
            return Ok(y);
        }
        i += 1;
    }
    Ok(y)
}

/// Computes the invariant `k = x·y·(x² + y²)` over normalized reserves.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the normalized product exceeds 256
/// bits, and [`AmmError::DivisionByZero`] if a scale is zero.
pub fn lp_value(
    x_coin: u128,
    x_scale: u64,
    y_coin: u128,
    y_scale: u64,
) -> Result<U256, AmmError> {
    let x = to_common_units(x_coin, x_scale)?;
    let y = to_common_units(y_coin, y_scale)?;

    let a = x
        .checked_mul(y)
        .ok_or(AmmError::Overflow("stable lp_value: x·y overflow"))?;
    let x2 = x
        .checked_mul(x)
        .ok_or(AmmError::Overflow("stable lp_value: x^2 overflow"))?;
    let y2 = y
        .checked_mul(y)
        .ok_or(AmmError::Overflow("stable lp_value: y^2 overflow"))?;
    let b = x2
        .checked_add(y2)
        .ok_or(AmmError::Overflow("stable lp_value sum overflow"))?;

    a.checked_mul(b)
        .ok_or(AmmError::Overflow("stable lp_value product overflow"))
}

/// Computes the output amount for a fee-adjusted input.
///
/// `coin_in` must already be net of fees: the fee-inclusive layer deducts
/// the fee (rounding the remainder up, in the pool's favor) before calling
/// here. The result is denormalized with a flooring division.
///
/// # Errors
///
/// - [`AmmError::Overflow`] / [`AmmError::ConversionOverflow`] on width
///   violations.
/// - [`AmmError::InsufficientLiquidity`] if the solved output-side balance
///   does not drop (degenerate input after normalization against huge
///   scales).
pub fn coin_out(
    coin_in: u128,
    scale_in: u64,
    scale_out: u64,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<u128, AmmError> {
    let k = lp_value(reserve_in, scale_in, reserve_out, scale_out)?;
    let reserve_in_scaled = to_common_units(reserve_in, scale_in)?;
    let reserve_out_scaled = to_common_units(reserve_out, scale_out)?;
    let amount_in = to_common_units(coin_in, scale_in)?;

    let total_reserve = amount_in
        .checked_add(reserve_in_scaled)
        .ok_or(AmmError::Overflow("stable coin_out reserve sum overflow"))?;
    let y_new = get_y(total_reserve, k, reserve_out_scaled)?;
    let delta = reserve_out_scaled
        .checked_sub(y_new)
        .ok_or(AmmError::InsufficientLiquidity)?;

    let denormalized = delta
        .checked_mul(U256::from(scale_out))
        .ok_or(AmmError::Overflow("stable coin_out denormalize overflow"))?
        / U256::from(PRECISION);
    to_u128(denormalized)
}

/// Computes the raw input required for an exact output, before fees.
///
/// The inverse invariant solve. The result is rounded up by one unit after
/// the denormalizing division; the fee-inclusive layer grosses it up for
/// the fee and rounds up once more. Both roundings are deliberate and
/// separate — the pool must never receive less than the invariant demands.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if `coin_out`, once normalized,
///   meets or exceeds the output reserve.
/// - [`AmmError::Overflow`] / [`AmmError::ConversionOverflow`] on width
///   violations.
/// - [`AmmError::Unreachable`] if the inverse solve lands below the
///   current input reserve, which a correct solver cannot do.
pub fn coin_in(
    coin_out: u128,
    scale_out: u64,
    scale_in: u64,
    reserve_out: u128,
    reserve_in: u128,
) -> Result<u128, AmmError> {
    let k = lp_value(reserve_in, scale_in, reserve_out, scale_out)?;
    let reserve_in_scaled = to_common_units(reserve_in, scale_in)?;
    let reserve_out_scaled = to_common_units(reserve_out, scale_out)?;
    let amount_out = to_common_units(coin_out, scale_out)?;

    if amount_out >= reserve_out_scaled {
        return Err(AmmError::InsufficientLiquidity);
    }
    let total_reserve = reserve_out_scaled - amount_out;
    let x_new = get_y(total_reserve, k, reserve_in_scaled)?;
    let delta = x_new
        .checked_sub(reserve_in_scaled)
        .ok_or(AmmError::Unreachable("stable inverse solve below reserve"))?;

    let denormalized = delta
        .checked_mul(U256::from(scale_in))
        .ok_or(AmmError::Overflow("stable coin_in denormalize overflow"))?
        / U256::from(PRECISION);
    to_u128(denormalized)?
        .checked_add(1)
        .ok_or(AmmError::Overflow("stable coin_in round-up overflow"))
}
