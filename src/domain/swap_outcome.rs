//! Outcome of a computed swap.

/// The amounts exchanged by one swap, as computed by the engine.
///
/// Ephemeral: produced and consumed within a single call, never persisted.
/// `amount_in` is the gross input (fee included); `amount_out` is what the
/// counterparty receives. An `amount_out` of zero is representable — a
/// dust-sized exact-in swap can legitimately round to nothing, and it is
/// the caller's minimum-output bound that decides whether that is
/// acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOutcome {
    amount_in: u64,
    amount_out: u64,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome`.
    #[must_use]
    pub const fn new(amount_in: u64, amount_out: u64) -> Self {
        Self {
            amount_in,
            amount_out,
        }
    }

    /// Returns the gross input amount, fee included.
    #[must_use]
    pub const fn amount_in(&self) -> u64 {
        self.amount_in
    }

    /// Returns the output amount.
    #[must_use]
    pub const fn amount_out(&self) -> u64 {
        self.amount_out
    }
}
