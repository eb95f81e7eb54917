//! The two interchangeable pricing formulas.
//!
//! Each curve answers the same two questions — output for a given input,
//! input for a desired output — with its own invariant:
//!
//! | Curve | Invariant | Suited to |
//! |-------|-----------|-----------|
//! | [`uncorrelated`] | `x · y = k` | uncorrelated pairs |
//! | [`stable`] | `x·y·(x² + y²) = k` at 1e8 precision | pegged pairs |
//!
//! Selection is by [`CurveKind`](crate::domain::CurveKind); every dispatch
//! site matches exhaustively over the closed enum, so there is no "unknown
//! curve" path at runtime.

pub mod stable;
pub mod uncorrelated;
