//! Pool façade: orientation handling, bounds checks, reserve updates.
//!
//! [`Pool`] is a caller-owned snapshot of one pool's externally-stored
//! state — canonical pair, curve, fee, and the two reserves. The engine
//! keeps no registry and nothing survives a call: quoting reads the
//! snapshot, swapping mutates it, and persisting the mutated snapshot is
//! the caller's business.
//!
//! Every entry point takes the caller's tokens in whatever order the
//! caller holds them. Orientation against the canonical pair happens
//! here, once, and results are expressed in the caller's terms — a caller
//! can never observe whether its order matched storage.
//!
//! # Caller contract
//!
//! Access to a given pool's reserves must be serialized by the host
//! (mutual exclusion or transactional ordering); the engine assumes each
//! read-compute-write on a snapshot is atomic. Composite routes must
//! abort the whole route if any step fails — nothing here is partially
//! applied, so there is never anything to roll back.

use tracing::trace;

use crate::domain::{CurveKind, FeeRate, SwapOutcome, Token, TokenPair};
use crate::error::AmmError;
use crate::{liquidity, swap};

/// A snapshot of one pool: identity plus current reserves.
///
/// Reserves are stored against the canonical pair order — `reserve_a`
/// belongs to [`TokenPair::first`], `reserve_b` to [`TokenPair::second`].
/// Both zero means an empty (uninitialized) pool, a valid state for
/// deposit but not for any conversion.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::{CurveKind, Decimals, FeeRate, Token, TokenAddress, TokenPair};
/// use riptide_amm::pool::Pool;
///
/// let usd1 = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let usd2 = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(6).expect("valid"));
/// let pair = TokenPair::new(usd1, usd2).expect("distinct");
/// let fee  = FeeRate::new(3, 1000).expect("valid");
///
/// let mut pool = Pool::new(pair, CurveKind::Uncorrelated, fee, 1_000_000, 1_000_000);
/// let outcome = pool.swap_exact_in(&usd1, 1_000, 990).expect("swap");
/// assert_eq!(outcome.amount_out(), 996);
/// assert_eq!(pool.reserves(), (1_001_000, 999_004));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    pair: TokenPair,
    curve: CurveKind,
    fee: FeeRate,
    reserve_a: u64,
    reserve_b: u64,
}

/// One side's view of the pool, resolved from a caller-supplied token.
struct Oriented {
    reserve_in: u64,
    reserve_out: u64,
    scale_in: u64,
    scale_out: u64,
    /// `true` when the input side is the canonical first token.
    forward: bool,
}

impl Pool {
    /// Creates a pool snapshot.
    ///
    /// `reserve_a` / `reserve_b` follow the canonical order of `pair`.
    /// Zero reserves are accepted — an empty pool is a real state.
    #[must_use]
    pub const fn new(
        pair: TokenPair,
        curve: CurveKind,
        fee: FeeRate,
        reserve_a: u64,
        reserve_b: u64,
    ) -> Self {
        Self {
            pair,
            curve,
            fee,
            reserve_a,
            reserve_b,
        }
    }

    /// Returns the canonical token pair.
    #[must_use]
    pub const fn pair(&self) -> TokenPair {
        self.pair
    }

    /// Returns the pool's curve kind.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        self.curve
    }

    /// Returns the pool's fee rate.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Returns `(reserve_a, reserve_b)` in canonical pair order.
    #[must_use]
    pub const fn reserves(&self) -> (u64, u64) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a == 0 && self.reserve_b == 0
    }

    /// Resolves reserves and scales relative to `token_in`.
    fn oriented(&self, token_in: &Token) -> Result<Oriented, AmmError> {
        if *token_in == self.pair.first() {
            Ok(Oriented {
                reserve_in: self.reserve_a,
                reserve_out: self.reserve_b,
                scale_in: self.pair.first().scale(),
                scale_out: self.pair.second().scale(),
                forward: true,
            })
        } else if *token_in == self.pair.second() {
            Ok(Oriented {
                reserve_in: self.reserve_b,
                reserve_out: self.reserve_a,
                scale_in: self.pair.second().scale(),
                scale_out: self.pair.first().scale(),
                forward: false,
            })
        } else {
            Err(AmmError::InvalidToken("token is not part of this pool"))
        }
    }

    /// Quotes the output for a gross input of `token_in`. Read-only.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] if `token_in` is not in the pair, plus
    /// the errors of [`swap::get_amount_out`].
    pub fn quote_out(&self, token_in: &Token, amount_in: u64) -> Result<u64, AmmError> {
        let o = self.oriented(token_in)?;
        swap::get_amount_out(
            self.curve,
            amount_in,
            o.reserve_in,
            o.reserve_out,
            o.scale_in,
            o.scale_out,
            self.fee,
        )
    }

    /// Quotes the gross input required to receive `amount_out` of
    /// `token_out`. Read-only.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] if `token_out` is not in the pair, plus
    /// the errors of [`swap::get_amount_in`].
    pub fn quote_in(&self, token_out: &Token, amount_out: u64) -> Result<u64, AmmError> {
        let token_in = self.pair.other(token_out)?;
        let o = self.oriented(&token_in)?;
        swap::get_amount_in(
            self.curve,
            amount_out,
            o.reserve_out,
            o.reserve_in,
            o.scale_out,
            o.scale_in,
            self.fee,
        )
    }

    /// Swaps an exact input, enforcing the caller's minimum output.
    ///
    /// On success the snapshot's reserves are updated (the fee stays in
    /// the pool).
    ///
    /// # Errors
    ///
    /// [`AmmError::OutputBelowMinimum`] if the computed output is less
    /// than `min_amount_out`; otherwise the errors of [`Self::quote_out`].
    /// On any error the snapshot is untouched.
    pub fn swap_exact_in(
        &mut self,
        token_in: &Token,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<SwapOutcome, AmmError> {
        let amount_out = self.quote_out(token_in, amount_in)?;
        if amount_out < min_amount_out {
            return Err(AmmError::OutputBelowMinimum);
        }
        self.apply_swap(token_in, amount_in, amount_out)?;
        trace!(amount_in, amount_out, min_amount_out, "exact-in swap applied");
        Ok(SwapOutcome::new(amount_in, amount_out))
    }

    /// Swaps for an exact output, enforcing the caller's input cap.
    ///
    /// # Errors
    ///
    /// [`AmmError::InputAboveMaximum`] if the required input exceeds
    /// `max_amount_in`; otherwise the errors of [`Self::quote_in`]. On any
    /// error the snapshot is untouched.
    pub fn swap_exact_out(
        &mut self,
        token_out: &Token,
        amount_out: u64,
        max_amount_in: u64,
    ) -> Result<SwapOutcome, AmmError> {
        let amount_in = self.quote_in(token_out, amount_out)?;
        if amount_in > max_amount_in {
            return Err(AmmError::InputAboveMaximum);
        }
        let token_in = self.pair.other(token_out)?;
        self.apply_swap(&token_in, amount_in, amount_out)?;
        trace!(amount_in, amount_out, max_amount_in, "exact-out swap applied");
        Ok(SwapOutcome::new(amount_in, amount_out))
    }

    /// Swaps an exact input with no bounds validation.
    ///
    /// For callers — multi-hop routers — that validated bounds on the
    /// aggregate route. Orientation and fee math are identical to the
    /// checked paths; only the minimum-output check is skipped.
    ///
    /// # Errors
    ///
    /// The errors of [`Self::quote_out`]. On any error the snapshot is
    /// untouched.
    pub fn swap_unchecked(
        &mut self,
        token_in: &Token,
        amount_in: u64,
    ) -> Result<SwapOutcome, AmmError> {
        let amount_out = self.quote_out(token_in, amount_in)?;
        self.apply_swap(token_in, amount_in, amount_out)?;
        trace!(amount_in, amount_out, "unchecked swap applied");
        Ok(SwapOutcome::new(amount_in, amount_out))
    }

    /// Converts `amount_in` of `token_in` through the current spot price,
    /// no fee. Read-only.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] if `token_in` is not in the pair, plus
    /// the errors of [`liquidity::convert_with_current_price`].
    pub fn spot_convert(&self, token_in: &Token, amount_in: u64) -> Result<u64, AmmError> {
        let o = self.oriented(token_in)?;
        liquidity::convert_with_current_price(amount_in, o.reserve_in, o.reserve_out)
    }

    /// Computes the optimal deposit split for this pool.
    ///
    /// `token_x` names the token the `x_*` arguments refer to; the `y_*`
    /// arguments refer to its counterpart. Results come back on the same
    /// axes. Read-only — minting and reserve bookkeeping belong to the
    /// caller.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidToken`] if `token_x` is not in the pair, plus
    /// the errors of [`liquidity::optimal_deposit`].
    pub fn optimal_deposit(
        &self,
        token_x: &Token,
        x_desired: u64,
        y_desired: u64,
        x_min: u64,
        y_min: u64,
    ) -> Result<(u64, u64), AmmError> {
        let o = self.oriented(token_x)?;
        liquidity::optimal_deposit(
            x_desired,
            y_desired,
            x_min,
            y_min,
            o.reserve_in,
            o.reserve_out,
        )
    }

    /// Computes the reserve amounts returned for burning `lp_burn` of
    /// `lp_total_supply` LP units, in canonical pair order. Read-only.
    ///
    /// # Errors
    ///
    /// The errors of [`liquidity::withdrawal_amounts`].
    pub fn withdrawal_amounts(
        &self,
        lp_burn: u64,
        lp_total_supply: u128,
    ) -> Result<(u64, u64), AmmError> {
        liquidity::withdrawal_amounts(lp_burn, lp_total_supply, self.reserve_a, self.reserve_b)
    }

    /// Applies a computed swap to the snapshot's reserves.
    ///
    /// The full input (fee included) enters the input-side reserve.
    fn apply_swap(
        &mut self,
        token_in: &Token,
        amount_in: u64,
        amount_out: u64,
    ) -> Result<(), AmmError> {
        let o = self.oriented(token_in)?;
        if amount_out >= o.reserve_out {
            return Err(AmmError::InsufficientLiquidity);
        }
        let new_in = o
            .reserve_in
            .checked_add(amount_in)
            .ok_or(AmmError::Overflow("pool reserve exceeds u64"))?;
        let new_out = o.reserve_out - amount_out;

        if o.forward {
            self.reserve_a = new_in;
            self.reserve_b = new_out;
        } else {
            self.reserve_b = new_in;
            self.reserve_a = new_out;
        }
        Ok(())
    }
}
