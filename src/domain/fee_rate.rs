//! Proportional swap fee as a validated numerator/denominator pair.

use core::fmt;

use crate::error::AmmError;

/// A proportional fee, `numerator / denominator` of the input amount.
///
/// Owned and configured externally (per pool); read-only to this engine.
/// Validation guarantees `denominator > 0` and `numerator < denominator`,
/// so the retained share `denominator - numerator` is always positive and
/// a swap can never consume its entire input as fee.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::FeeRate;
///
/// // 0.3%
/// let fee = FeeRate::new(3, 1000).expect("valid");
/// assert_eq!(fee.retained(), 997);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate {
    numerator: u64,
    denominator: u64,
}

impl FeeRate {
    /// Creates a validated `FeeRate`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if `denominator` is zero.
    /// - [`AmmError::InvalidFee`] if `numerator >= denominator`.
    pub const fn new(numerator: u64, denominator: u64) -> Result<Self, AmmError> {
        if denominator == 0 {
            return Err(AmmError::InvalidFee("fee denominator must be positive"));
        }
        if numerator >= denominator {
            return Err(AmmError::InvalidFee(
                "fee numerator must be below denominator",
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns the retained share of the input, `denominator - numerator`.
    ///
    /// Always positive for a validly constructed `FeeRate`.
    #[must_use]
    pub const fn retained(&self) -> u64 {
        self.denominator - self.numerator
    }

    /// Returns `true` if the fee is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({}/{})", self.numerator, self.denominator)
    }
}
