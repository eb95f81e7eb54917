//! Constant-product pricing with the fee folded into the formula.
//!
//! The invariant is `reserve_in · reserve_out = k`. Rather than deducting
//! the fee with a separate rounding division, both closed forms carry the
//! fee numerator/denominator through the formula, so no precision is lost
//! to an intermediate truncation:
//!
//! ```text
//! out = ⌊ in·retained · reserve_out / (reserve_in·denominator + in·retained) ⌋
//! in  = ⌊ out · reserve_in·denominator / ((reserve_out − out)·retained) ⌋ + 1
//! ```
//!
//! Output rounds down and required input rounds up, so rounding never
//! favors the trader. Decimal scales are irrelevant here: the formula is a
//! pure ratio and they cancel.

use crate::domain::FeeRate;
use crate::error::AmmError;
use crate::math::{mul_div_wide, mul_to_wide};

/// Computes the output amount for a gross input, fee included.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if an intermediate term exceeds its working
///   width.
/// - [`AmmError::DivisionByZero`] only if both `reserve_in` and `coin_in`
///   are zero; callers validate positive amounts and reserves first.
pub fn coin_out_with_fee(
    coin_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee: FeeRate,
) -> Result<u64, AmmError> {
    let coin_in_after_fee = mul_to_wide(coin_in, fee.retained());
    let new_reserve_in = mul_to_wide(reserve_in, fee.denominator())
        .checked_add(coin_in_after_fee)
        .ok_or(AmmError::Overflow("constant product reserve term overflow"))?;

    let out = mul_div_wide(coin_in_after_fee, reserve_out as u128, new_reserve_in)?;
    // mul_div_wide bounds its quotient to u64
    Ok(out as u64)
}

/// Computes the gross input required for an exact output, fee included.
///
/// Rounds up: the returned input, when swapped, yields at least `coin_out`.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if `coin_out >= reserve_out` — a
///   reserve can never be drained to zero or below.
/// - [`AmmError::Overflow`] if an intermediate term exceeds its working
///   width or the rounded-up input exceeds `u64::MAX`.
pub fn coin_in_with_fee(
    coin_out: u64,
    reserve_out: u64,
    reserve_in: u64,
    fee: FeeRate,
) -> Result<u64, AmmError> {
    if coin_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let new_reserve_out = mul_to_wide(reserve_out - coin_out, fee.retained());
    let numerator = mul_to_wide(coin_out, reserve_in);
    let coin_in = mul_div_wide(numerator, fee.denominator() as u128, new_reserve_out)?;

    (coin_in as u64)
        .checked_add(1)
        .ok_or(AmmError::Overflow("required input exceeds u64"))
}
