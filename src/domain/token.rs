//! Token identity type.

use super::{Decimals, TokenAddress};
use crate::error::AmmError;

/// The identity of a token: its canonical address plus its decimals.
///
/// Two tokens are equal only when both fields match. The decimals travel
/// with the identity because the stable curve needs each side's
/// power-of-ten scale; the address alone cannot supply it.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::{Decimals, Token, TokenAddress};
///
/// let tok = Token::new(
///     TokenAddress::from_bytes([1u8; 32]),
///     Decimals::new(6).expect("valid"),
/// );
/// assert_eq!(tok.decimals().get(), 6);
/// assert_eq!(tok.scale(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    ///
    /// Infallible: both components are validated at their own
    /// construction sites.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns `10^decimals`, the raw units in one whole token.
    #[must_use]
    pub const fn scale(&self) -> u64 {
        self.decimals.scale()
    }

    /// Converts a whole-token amount to this token's raw units.
    ///
    /// `1` of a 6-decimals token becomes `1_000_000`.
    #[must_use]
    pub const fn to_raw_amount(&self, human: u64) -> u128 {
        self.decimals.scale_up(human)
    }

    /// Converts raw units back to a whole-token amount, truncating any
    /// sub-token remainder.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ConversionOverflow`] if the result does not fit
    /// in `u64`.
    pub const fn from_raw_amount(&self, raw: u128) -> Result<u64, AmmError> {
        self.decimals.scale_down(raw)
    }
}
