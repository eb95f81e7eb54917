//! # Riptide AMM
//!
//! Deterministic pricing and liquidity math for constant-product and
//! stable-curve pools, written as a pure engine: integer-only, stateless,
//! and side-effect free. The host system owns pool storage, token
//! transfers, and LP accounting; this crate owns the arithmetic.
//!
//! Two curve families are supported:
//!
//! - **Uncorrelated** (`x · y = k`) — the classic constant-product curve
//!   for unrelated assets.
//! - **Stable** (`x·y·(x² + y²) = k`) — a flattened curve for pegged
//!   assets, solved by Newton iteration over decimal-normalized reserves.
//!
//! All rounding favors the pool: exact-in outputs truncate, exact-out
//! inputs round up, and the fee keeps every division remainder. Given the
//! same inputs the engine returns bit-identical results on every platform.
//!
//! # Quick Start
//!
//! ```rust
//! use riptide_amm::domain::{CurveKind, Decimals, FeeRate, Token, TokenAddress, TokenPair};
//! use riptide_amm::pool::Pool;
//!
//! // 1. Define two tokens
//! let usdt = Token::new(
//!     TokenAddress::from_bytes([1u8; 32]),
//!     Decimals::new(6).expect("valid decimals"),
//! );
//! let weth = Token::new(
//!     TokenAddress::from_bytes([2u8; 32]),
//!     Decimals::new(6).expect("valid decimals"),
//! );
//!
//! // 2. Snapshot a constant-product pool with a 0.3% fee
//! let pair = TokenPair::new(usdt, weth).expect("distinct tokens");
//! let fee  = FeeRate::new(3, 1000).expect("valid fee");
//! let mut pool = Pool::new(pair, CurveKind::Uncorrelated, fee, 1_000_000, 1_000_000);
//!
//! // 3. Quote, then swap with slippage protection
//! assert_eq!(pool.quote_out(&usdt, 1_000), Ok(996));
//! let outcome = pool.swap_exact_in(&usdt, 1_000, 990).expect("swap succeeded");
//!
//! assert_eq!(outcome.amount_out(), 996);
//! assert_eq!(pool.reserves(), (1_001_000, 999_004));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  owns pool storage, passes snapshots in
//! └──────┬──────┘
//!        │ Pool::{quote_out, swap_exact_in, …}
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  orientation, bounds checks, reserve updates
//! └──────┬──────┘
//!        │ swap::get_amount_out / get_amount_in, liquidity::*
//!        ▼
//! ┌─────────────┐
//! │  Swap math   │  fee folding, pool-favoring rounding, curve dispatch
//! └──────┬──────┘
//!        │ CurveKind (enum dispatch)
//!        ▼
//! ┌─────────────┐
//! │   Curves     │  uncorrelated (x·y), stable (x·y·(x²+y²), Newton)
//! └──────┬──────┘
//!        │ mul_div, mul_div_wide, U256
//!        ▼
//! ┌─────────────┐
//! │    Math      │  checked widening arithmetic kernel
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Token`](domain::Token), [`TokenPair`](domain::TokenPair), [`FeeRate`](domain::FeeRate), [`CurveKind`](domain::CurveKind), … |
//! | [`pool`] | [`Pool`](pool::Pool) snapshot façade: quotes, checked and unchecked swaps, deposits, withdrawals |
//! | [`swap`] | Fee-inclusive exact-in / exact-out math over either curve |
//! | [`liquidity`] | Optimal deposit split, proportional withdrawal, spot conversion |
//! | [`curves`] | Raw curve formulas: [`uncorrelated`](curves::uncorrelated), [`stable`](curves::stable) |
//! | [`math`] | Checked widening kernel: [`mul_div`](math::mul_div), [`mul_div_wide`](math::mul_div_wide) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod curves;
pub mod domain;
pub mod error;
pub mod liquidity;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod swap;

#[cfg(test)]
mod properties;
