//! Token decimal places and their power-of-ten scale.

use crate::error::AmmError;

/// Upper bound on decimal places; keeps `10^decimals` inside `u64`.
const MAX_DECIMALS: u8 = 18;

/// The number of decimal places a token uses for its raw units.
///
/// Valid range is `0..=18`. The derived [`scale`](Self::scale) — the
/// power-of-ten normalizing factor — is what the stable curve consumes to
/// bring both sides of a pair to a common unit. The constant-product curve
/// never looks at it (decimals cancel in a pure ratio).
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::Decimals;
///
/// let d = Decimals::new(6).expect("valid");
/// assert_eq!(d.scale(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decimals(u8);

impl Decimals {
    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the raw units in one whole token.
    ///
    /// Always at least 1 and at most `10^18`, so it fits `u64`.
    #[must_use]
    pub const fn scale(&self) -> u64 {
        10u64.pow(self.0 as u32)
    }

    /// Converts a whole-token amount to raw units.
    ///
    /// Cannot overflow: `u64::MAX · 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, amount: u64) -> u128 {
        (amount as u128) * (self.scale() as u128)
    }

    /// Converts raw units back to a whole-token amount, truncating any
    /// sub-token remainder.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ConversionOverflow`] if the result does not fit
    /// in `u64`.
    pub const fn scale_down(&self, raw: u128) -> Result<u64, AmmError> {
        let result = raw / (self.scale() as u128);
        if result > u64::MAX as u128 {
            return Err(AmmError::ConversionOverflow);
        }
        Ok(result as u64)
    }
}
