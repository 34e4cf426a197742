//! Authentication extractors.
//!
//! `RequireAuth` reads the `sessionid` cookie and runs it through the
//! authorization gate in [`AuthService::authorize`](crate::services::auth::AuthService::authorize).

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use schoolkit_core::Identity;

use super::session::session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires an authenticated session.
///
/// Rejects with `401 {"error": "Unauthorized"}` when the cookie is missing,
/// malformed, unknown, expired, or bound to a user that no longer exists.
///
/// # Example
///
/// ```rust,ignore
/// async fn whoami(RequireAuth(identity): RequireAuth) -> String {
///     identity.username
/// }
/// ```
pub struct RequireAuth(pub Identity);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let identity = state.auth().authorize(session_token(&jar)).await?;

        tracing::Span::current().record("user_id", identity.user_id.as_str());

        Ok(Self(identity))
    }
}
