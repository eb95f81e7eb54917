//! Deposit and withdrawal math.
//!
//! Deposits are fee-free: the allocator's only job is to find the largest
//! deposit inside the caller's desired amounts that preserves the pool's
//! current price ratio, honoring caller-supplied minimums as slippage
//! protection. Withdrawals are the inverse conversion: a proportional
//! claim on both reserves for a burned LP share.

use crate::error::AmmError;
use crate::math::{mul_div_wide, mul_to_wide};

/// Converts an amount through the current reserve ratio, no fee.
///
/// `amount_out = floor(amount_in · reserve_out / reserve_in)`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - [`AmmError::ConversionOverflow`] if the result exceeds `u64::MAX`.
pub const fn convert_with_current_price(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
) -> Result<u64, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::InvalidAmount("conversion amount must be positive"));
    }
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InvalidReserve(
            "price conversion requires positive reserves",
        ));
    }
    let res = mul_to_wide(amount_in, reserve_out) / (reserve_in as u128);
    if res > u64::MAX as u128 {
        return Err(AmmError::ConversionOverflow);
    }
    Ok(res as u64)
}

/// Computes the optimal deposit split preserving the current price.
///
/// Returns the `(x_used, y_used)` actually deposited:
///
/// - Fresh pool (both reserves zero): `(x_desired, y_desired)` unchanged —
///   the first depositor sets the initial price.
/// - Otherwise one side is taken in full and the other is implied by the
///   reserve ratio, whichever fit lies inside both desired amounts.
///
/// # Errors
///
/// - [`AmmError::InsufficientYAmount`] / [`AmmError::InsufficientXAmount`]
///   if the implied side falls below the caller's minimum.
/// - [`AmmError::Unreachable`] if the implied X exceeds the desired X
///   after the Y-implied branch already failed — the branch structure
///   makes that impossible, so hitting it is an engine defect.
/// - Errors of [`convert_with_current_price`] (zero desired amount, one
///   zero reserve, overflow).
pub fn optimal_deposit(
    x_desired: u64,
    y_desired: u64,
    x_min: u64,
    y_min: u64,
    reserve_x: u64,
    reserve_y: u64,
) -> Result<(u64, u64), AmmError> {
    if reserve_x == 0 && reserve_y == 0 {
        return Ok((x_desired, y_desired));
    }

    let y_implied = convert_with_current_price(x_desired, reserve_x, reserve_y)?;
    if y_implied <= y_desired {
        if y_implied < y_min {
            return Err(AmmError::InsufficientYAmount);
        }
        Ok((x_desired, y_implied))
    } else {
        let x_implied = convert_with_current_price(y_desired, reserve_y, reserve_x)?;
        if x_implied > x_desired {
            return Err(AmmError::Unreachable("implied X exceeds desired X"));
        }
        if x_implied < x_min {
            return Err(AmmError::InsufficientXAmount);
        }
        Ok((x_implied, y_desired))
    }
}

/// Computes the reserve amounts returned for burning an LP share.
///
/// `x_out = floor(reserve_x · lp_burn / lp_total_supply)`, symmetric for
/// `y_out`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `lp_burn` is zero or exceeds the total
///   supply.
/// - [`AmmError::InvalidReserve`] if `lp_total_supply` is zero.
/// - [`AmmError::ZeroAmount`] if either share rounds to zero — dust burns
///   that would withdraw nothing are rejected rather than silently burned.
pub fn withdrawal_amounts(
    lp_burn: u64,
    lp_total_supply: u128,
    reserve_x: u64,
    reserve_y: u64,
) -> Result<(u64, u64), AmmError> {
    if lp_total_supply == 0 {
        return Err(AmmError::InvalidReserve("no LP supply to burn against"));
    }
    if lp_burn == 0 {
        return Err(AmmError::InvalidAmount("LP burn amount must be positive"));
    }
    if lp_burn as u128 > lp_total_supply {
        return Err(AmmError::InvalidAmount("LP burn amount exceeds supply"));
    }

    let x_out = mul_div_wide(reserve_x as u128, lp_burn as u128, lp_total_supply)? as u64;
    let y_out = mul_div_wide(reserve_y as u128, lp_burn as u128, lp_total_supply)? as u64;
    if x_out == 0 || y_out == 0 {
        return Err(AmmError::ZeroAmount);
    }
    Ok((x_out, y_out))
}
