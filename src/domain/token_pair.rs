//! Canonically ordered pair of distinct tokens.

use super::Token;
use crate::error::AmmError;

/// Returns `true` if `(a, b)` is already in canonical order.
///
/// The canonical order is the lexicographic order of the token addresses.
/// This is the pure predicate behind pool-identity uniqueness: `(A, B)` and
/// `(B, A)` always resolve to the same pool because exactly one of the two
/// orderings is canonical.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::{is_sorted, Decimals, Token, TokenAddress};
///
/// let a = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let b = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(8).expect("valid"));
/// assert!(is_sorted(&a, &b));
/// assert!(!is_sorted(&b, &a));
/// ```
#[must_use]
pub fn is_sorted(a: &Token, b: &Token) -> bool {
    a.address() < b.address()
}

/// An unordered pair of distinct tokens, stored in canonical order.
///
/// `TokenPair::new` sorts on construction, so
/// `first().address() < second().address()` always holds and a pool keyed
/// by its pair cannot be duplicated under the reversed ordering.
///
/// # Examples
///
/// ```
/// use riptide_amm::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let a = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let b = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::new(8).expect("valid"));
///
/// // Construction order does not matter:
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.first(), a);
/// assert_eq!(pair.second(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    /// Creates a canonically ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both tokens share an address.
    pub fn new(token1: Token, token2: Token) -> Result<Self, AmmError> {
        if token1.address() == token2.address() {
            return Err(AmmError::InvalidToken(
                "pair requires two distinct token addresses",
            ));
        }

        let (token_a, token_b) = if is_sorted(&token1, &token2) {
            (token1, token2)
        } else {
            (token2, token1)
        };

        Ok(Self { token_a, token_b })
    }

    /// Returns the first token (lower address).
    #[must_use]
    pub const fn first(&self) -> Token {
        self.token_a
    }

    /// Returns the second token (higher address).
    #[must_use]
    pub const fn second(&self) -> Token {
        self.token_b
    }

    /// Returns `true` if `token` is one of the pair's members.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<Token, AmmError> {
        if *token == self.token_a {
            Ok(self.token_b)
        } else if *token == self.token_b {
            Ok(self.token_a)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }
}
