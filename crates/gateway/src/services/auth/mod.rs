//! Authentication service.
//!
//! Verifies credentials against the user registry, issues sessions into the
//! session store, and resolves session cookies back to identities.
//!
//! # Authorization gate
//!
//! ```text
//! no token                         -> MissingCredential
//! malformed / unknown / expired    -> InvalidCredential
//! token -> user not in registry    -> InvalidCredential
//! token -> user                    -> Authenticated(identity)
//! ```
//!
//! The gate never mutates either store.

mod error;

pub use error::AuthError;

use secrecy::ExposeSecret;

use schoolkit_core::{Identity, SessionToken, UserId};

use crate::db::{SessionStore, UserRegistry};
use crate::models::Session;

/// How many fresh tokens to try before giving up on issuing a session.
const MAX_ISSUE_ATTEMPTS: usize = 8;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Token to hand back to the client in the session cookie.
    pub token: SessionToken,
    /// The authenticated user.
    pub identity: Identity,
}

/// Authentication service.
///
/// Borrows the shared stores from application state for the duration of a
/// request.
pub struct AuthService<'a> {
    users: &'a UserRegistry,
    sessions: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserRegistry, sessions: &'a SessionStore) -> Self {
        Self { users, sessions }
    }

    // =========================================================================
    // Credential Verification
    // =========================================================================

    /// Check a username/password pair against the registry.
    ///
    /// Both fields must match exactly (case-sensitive). The first matching
    /// record wins.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredential` if no record matches.
    pub fn verify_credentials(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        self.users
            .records()
            .find(|record| {
                record.identity.username == username
                    && constant_time_compare(record.password.expose_secret(), password)
            })
            .map(|record| record.identity.clone())
            .ok_or(AuthError::InvalidCredential)
    }

    // =========================================================================
    // Login / Logout
    // =========================================================================

    /// Verify credentials and open a session for the user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredential` if the credentials do not match;
    /// no session is created in that case.
    /// Returns `AuthError::TokenExhausted` if no unique token could be issued.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let identity = self.verify_credentials(username, password)?;
        let token = self.issue_session(&identity.user_id).await?;

        Ok(LoginOutcome { token, identity })
    }

    /// End the session named by `raw_token`, if any.
    ///
    /// Always succeeds. Returns the session that was ended, or `None` if the
    /// token was absent, malformed, or already gone.
    pub async fn logout(&self, raw_token: Option<&str>) -> Option<Session> {
        let token = SessionToken::parse(raw_token?).ok()?;
        self.sessions.delete(&token).await
    }

    // =========================================================================
    // Session Issuance
    // =========================================================================

    /// Record a new session for `user_id` under a freshly generated token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExhausted` if every attempt collided with a
    /// live token.
    pub async fn issue_session(&self, user_id: &UserId) -> Result<SessionToken, AuthError> {
        self.issue_session_with(user_id, || SessionToken::generate(&mut rand::rng()))
            .await
    }

    /// Issue a session using tokens drawn from `next_token`.
    ///
    /// Generates, inserts only if absent, and retries on conflict, so a token
    /// is never shared by two live sessions.
    async fn issue_session_with(
        &self,
        user_id: &UserId,
        mut next_token: impl FnMut() -> SessionToken,
    ) -> Result<SessionToken, AuthError> {
        for attempt in 1..=MAX_ISSUE_ATTEMPTS {
            let token = next_token();
            if self
                .sessions
                .try_insert(token.clone(), Session::new(user_id.clone()))
                .await
            {
                return Ok(token);
            }
            tracing::warn!(attempt, "Session token collision, retrying");
        }

        Err(AuthError::TokenExhausted(MAX_ISSUE_ATTEMPTS))
    }

    // =========================================================================
    // Authorization Gate
    // =========================================================================

    /// Resolve a session cookie value to the identity it authenticates.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredential` if no token was presented.
    /// Returns `AuthError::InvalidCredential` if the token is malformed,
    /// unknown, expired, or points at a user missing from the registry.
    pub async fn authorize(&self, raw_token: Option<&str>) -> Result<Identity, AuthError> {
        let raw_token = raw_token.ok_or(AuthError::MissingCredential)?;
        let token = SessionToken::parse(raw_token).map_err(|_| AuthError::InvalidCredential)?;

        let user_id = self
            .sessions
            .get(&token)
            .await
            .ok_or(AuthError::InvalidCredential)?;

        self.users.get_by_id(&user_id).cloned().ok_or_else(|| {
            tracing::warn!(user_id = %user_id, "Session points at unknown user");
            AuthError::InvalidCredential
        })
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
