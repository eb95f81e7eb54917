//! Chain-agnostic token identifier.

/// The canonical byte identity of a token, independent of any chain format.
///
/// Wraps a fixed `[u8; 32]` array. Every 32-byte sequence is a valid
/// identifier, so construction is infallible. The derived `Ord` is
/// lexicographic over the bytes and supplies the total order used to
/// canonicalize token pairs.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::TokenAddress;
///
/// let lo = TokenAddress::from_bytes([1u8; 32]);
/// let hi = TokenAddress::from_bytes([2u8; 32]);
/// assert!(lo < hi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}
