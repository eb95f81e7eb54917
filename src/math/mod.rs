//! Arithmetic kernel for the pricing engine.
//!
//! Exposes the overflow-checked multiply/divide primitives every curve and
//! liquidity computation is built on. Nothing here knows about tokens,
//! fees, or curves — it is pure integer arithmetic with explicit failure
//! modes.

mod kernel;

pub use kernel::{mul_div, mul_div_wide, mul_to_wide, narrow_to_u64};
