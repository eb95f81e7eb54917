//! Unified error type for the engine.
//!
//! Every fallible operation in the crate returns [`AmmError`]. Variants
//! carry a `&'static str` detail where one rejection kind covers several
//! call sites; the string names the violated constraint, not the caller.
//! Errors are values — nothing in the engine panics on bad input.

use thiserror::Error;

/// Unified error enum for all engine operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmError {
    /// An amount argument violated its constraint (zero where positive is
    /// required, or out of range).
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A reserve argument violated its constraint.
    #[error("invalid reserve: {0}")]
    InvalidReserve(&'static str),

    /// A fee schedule was malformed.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A token argument did not identify a usable token for the operation.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A decimal precision was outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A checked arithmetic step exceeded its result width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A wide intermediate could not be narrowed back to `u64`.
    #[error("conversion overflow: result exceeds u64")]
    ConversionOverflow,

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The requested output meets or exceeds the available reserve.
    #[error("insufficient liquidity for requested output")]
    InsufficientLiquidity,

    /// The implied X deposit fell below the caller's minimum.
    #[error("deposit below minimum X amount")]
    InsufficientXAmount,

    /// The implied Y deposit fell below the caller's minimum.
    #[error("deposit below minimum Y amount")]
    InsufficientYAmount,

    /// An exact-in swap produced less than the caller's minimum output.
    #[error("swap output below caller minimum")]
    OutputBelowMinimum,

    /// An exact-out swap required more than the caller's maximum input.
    #[error("swap input above caller maximum")]
    InputAboveMaximum,

    /// A computed amount rounded to zero where zero is not deliverable.
    #[error("computed amount rounds to zero")]
    ZeroAmount,

    /// An internal branch that the surrounding checks make impossible.
    /// Surfacing it as an error keeps the engine panic-free; seeing one is
    /// an engine defect, not a caller mistake.
    #[error("unreachable engine state: {0}")]
    Unreachable(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
