//! Domain value types for the pricing engine.
//!
//! Newtypes with validated constructors enforce the data-model invariants
//! at the boundary: decimals are range-checked, fee rates are proper
//! fractions, token pairs are canonically ordered on construction. Amounts
//! and reserves stay raw `u64` — the arithmetic kernel owns their widening
//! discipline.

mod curve;
mod decimals;
mod fee_rate;
mod swap_outcome;
mod token;
mod token_address;
mod token_pair;

pub use curve::CurveKind;
pub use decimals::Decimals;
pub use fee_rate::FeeRate;
pub use swap_outcome::SwapOutcome;
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::{is_sorted, TokenPair};
