//! Session token type.

use core::fmt;

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a session token.
pub const SESSION_TOKEN_LENGTH: usize = 32;

/// The 62-symbol alphabet session tokens are drawn from.
pub const SESSION_TOKEN_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors that can occur when parsing a [`SessionToken`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionTokenError {
    /// The input has the wrong number of characters.
    #[error("session token must be exactly {expected} characters (got {actual})")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
    /// The input contains a character outside `[a-zA-Z0-9]`.
    #[error("session token must be alphanumeric")]
    InvalidCharacter,
}

/// An opaque session token, as carried in the `sessionid` cookie.
///
/// ## Constraints
///
/// - Exactly 32 characters
/// - Only ASCII letters and digits
///
/// `Debug` output is redacted so tokens never end up in logs.
///
/// ## Examples
///
/// ```
/// use schoolkit_core::SessionToken;
///
/// assert!(SessionToken::parse("aB3dE5gH7jK9mN1pQ3sT5vW7yZ9bC1dF").is_ok());
/// assert!(SessionToken::parse("too-short").is_err());
/// assert!(SessionToken::parse("aB3dE5gH7jK9mN1pQ3sT5vW7yZ9bC1d!").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Parse a `SessionToken` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 ASCII alphanumeric
    /// characters.
    pub fn parse(s: &str) -> Result<Self, SessionTokenError> {
        if s.len() != SESSION_TOKEN_LENGTH {
            return Err(SessionTokenError::WrongLength {
                expected: SESSION_TOKEN_LENGTH,
                actual: s.len(),
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(SessionTokenError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Draw a fresh token from `rng`.
    ///
    /// Each character is sampled uniformly from the 62-symbol alphabet.
    /// Callers should pass a cryptographically secure generator such as
    /// `rand::rng()`.
    #[must_use]
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let token = (0..SESSION_TOKEN_LENGTH)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect();
        Self(token)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
