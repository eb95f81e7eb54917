//! Overflow-checked multiply-then-divide primitives.
//!
//! Every pricing formula in the crate routes its intermediate products
//! through these functions, so overflow is always an explicit error and
//! never silent wrapping or truncation.
//!
//! # Convention
//!
//! Division truncates toward zero. Inputs are unsigned, so no operation
//! can produce a negative intermediate. Results that must re-enter the
//! `u64` amount domain are bounds-checked here rather than at the cast
//! site.
//!
//! # Examples
//!
//! ```
//! use riptide_amm::math::{mul_div, mul_to_wide};
//!
//! assert_eq!(mul_to_wide(u64::MAX, 2), (u64::MAX as u128) * 2);
//! assert_eq!(mul_div(10, 10, 3), Ok(33));
//! assert!(mul_div(u64::MAX, u64::MAX, 1).is_err());
//! ```

use crate::error::AmmError;

/// Exact widening multiply: `a · b` as `u128`.
///
/// Infallible — the product of two `u64` values always fits `u128`.
#[must_use]
pub const fn mul_to_wide(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Computes `floor(a · b / c)` over a `u128` intermediate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u64::MAX`.
pub const fn mul_div(a: u64, b: u64, c: u64) -> Result<u64, AmmError> {
    if c == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let r = mul_to_wide(a, b) / (c as u128);
    if r > u64::MAX as u128 {
        return Err(AmmError::Overflow("mul_div result exceeds u64"));
    }
    Ok(r as u64)
}

/// Computes `floor(a · b / c)` at double width, for chained computations.
///
/// The quotient is additionally bounded to `u64::MAX`: every consumer of
/// this function narrows its result back into the `u64` amount domain, so
/// a wider quotient is already an overflow, caught here rather than at a
/// later cast.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c` is zero.
/// - [`AmmError::Overflow`] if `a · b` exceeds `u128` or the quotient
///   exceeds `u64::MAX`.
pub const fn mul_div_wide(a: u128, b: u128, c: u128) -> Result<u128, AmmError> {
    if c == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = match a.checked_mul(b) {
        Some(p) => p,
        None => return Err(AmmError::Overflow("mul_div_wide product exceeds u128")),
    };
    let r = product / c;
    if r > u64::MAX as u128 {
        return Err(AmmError::Overflow("mul_div_wide result exceeds u64"));
    }
    Ok(r)
}

/// Narrows a wide value back to `u64`.
///
/// # Errors
///
/// Returns [`AmmError::ConversionOverflow`] if `value` exceeds `u64::MAX`.
pub const fn narrow_to_u64(value: u128) -> Result<u64, AmmError> {
    if value > u64::MAX as u128 {
        return Err(AmmError::ConversionOverflow);
    }
    Ok(value as u64)
}
