//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`. Every error response has a JSON body of the form
//! `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::auth::AuthError;

/// Application-level error type for the gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required query or body field absent.
    #[error("Missing required query parameter: {0}")]
    MissingParameter(String),

    /// Query string could not be decoded (e.g. a repeated parameter).
    #[error("Invalid query string: {0}")]
    MalformedQuery(String),

    /// Request body could not be decoded.
    #[error("Failed to decode request body: {0}")]
    MalformedBody(String),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Authenticated, but not allowed to touch this resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP method not supported by the endpoint.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Response body could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::MalformedQuery(_) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Auth(err) => match err {
                AuthError::MissingCredential | AuthError::InvalidCredential => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::TokenExhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Encoding(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::MissingParameter(names) => format!("Missing required query parameter: {names}"),
            Self::MalformedQuery(_) => "Invalid query string".to_string(),
            Self::MalformedBody(_) => "Failed to decode request body".to_string(),
            Self::Auth(_) if status == StatusCode::UNAUTHORIZED => "Unauthorized".to_string(),
            Self::Forbidden(_) => "Forbidden".to_string(),
            Self::NotFound(what) => format!("Not found: {what}"),
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::Auth(_) | Self::Encoding(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedQuery(rejection.body_text())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from an authenticated identity.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, username: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            username: Some(username.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}
