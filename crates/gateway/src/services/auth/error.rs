//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no session cookie.
    #[error("missing session credential")]
    MissingCredential,

    /// Wrong username/password, or a session token that does not resolve.
    #[error("invalid credentials")]
    InvalidCredential,

    /// No unused session token could be found.
    #[error("could not issue a unique session token after {0} attempts")]
    TokenExhausted(usize),
}
