//! Authentication route handlers.
//!
//! Handles login, logout and the session status probe. The session token
//! only ever travels in the `sessionid` cookie; response bodies carry the
//! public identity.

use axum::{body::Bytes, extract::State};
use axum_extra::extract::cookie::CookieJar;
use schoolkit_core::Identity;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use super::{ApiJson, decode_body};
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAuth, removal_cookie, session_cookie, session_token};
use crate::state::AppState;

// =============================================================================
// Request Types
// =============================================================================

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle login.
///
/// On success the session cookie is set and the identity is returned.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, ApiJson<Identity>)> {
    let request: LoginRequest = decode_body(&body)?;

    match state.auth().login(&request.username, &request.password).await {
        Ok(outcome) => {
            tracing::info!(
                username = %outcome.identity.username,
                user_id = %outcome.identity.user_id,
                "Login succeeded"
            );
            set_sentry_user(&outcome.identity.user_id, &outcome.identity.username);

            let cookie = session_cookie(&outcome.token, state.config().secure_cookies);
            Ok((jar.add(cookie), ApiJson(outcome.identity)))
        }
        Err(e) => {
            tracing::warn!(username = %request.username, "Login failed: {e}");
            Err(e.into())
        }
    }
}

/// Return the identity bound to the current session.
#[instrument(skip_all)]
pub async fn status(RequireAuth(identity): RequireAuth) -> ApiJson<Identity> {
    ApiJson(identity)
}

/// Handle logout.
///
/// Always succeeds and always clears the cookie, whether or not the
/// presented token named a live session.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, ApiJson<Value>) {
    if let Some(session) = state.auth().logout(session_token(&jar)).await {
        tracing::info!(
            user_id = %session.user_id,
            session_age_secs = session.age_secs(),
            "Logged out"
        );
    }
    clear_sentry_user();

    (
        jar.add(removal_cookie()),
        ApiJson(json!({ "message": "Logged out" })),
    )
}
