//! Convenience re-exports for the common path.
//!
//! ```rust
//! use riptide_amm::prelude::*;
//!
//! let a = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6)?);
//! let b = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(6)?);
//! let pool = Pool::new(
//!     TokenPair::new(a, b)?,
//!     CurveKind::Uncorrelated,
//!     FeeRate::new(3, 1000)?,
//!     1_000_000,
//!     1_000_000,
//! );
//! assert_eq!(pool.quote_out(&a, 1_000)?, 996);
//! # Ok::<(), AmmError>(())
//! ```

pub use crate::domain::{
    is_sorted, CurveKind, Decimals, FeeRate, SwapOutcome, Token, TokenAddress, TokenPair,
};
pub use crate::error::{AmmError, Result};
pub use crate::liquidity::{convert_with_current_price, optimal_deposit, withdrawal_amounts};
pub use crate::pool::Pool;
pub use crate::swap::{get_amount_in, get_amount_out};
