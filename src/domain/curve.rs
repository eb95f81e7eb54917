//! Curve selector for a pool's pricing formula.

/// The pricing formula a pool uses, fixed for the pool's lifetime.
///
/// A closed enum: every dispatch site matches exhaustively, so an unknown
/// curve kind is unrepresentable rather than a runtime error.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::CurveKind;
///
/// assert!(CurveKind::Stable.is_stable());
/// assert!(CurveKind::Uncorrelated.is_uncorrelated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    /// Constant product, `reserve_in · reserve_out = k`. Suited to
    /// uncorrelated asset pairs; ignores decimal scales (they cancel).
    Uncorrelated,
    /// Stable swap, flat near 1:1. Suited to pegged pairs; normalizes both
    /// sides through their decimal scales before pricing.
    Stable,
}

impl CurveKind {
    /// Returns `true` for [`CurveKind::Stable`].
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }

    /// Returns `true` for [`CurveKind::Uncorrelated`].
    #[must_use]
    pub const fn is_uncorrelated(&self) -> bool {
        matches!(self, Self::Uncorrelated)
    }
}
