//! HTTP route handlers for the gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//!
//! # Auth
//! POST /api/login               - Verify credentials, set session cookie
//! GET  /api/auth/status         - Identity of the current session
//! POST /api/logout              - Drop the session, clear the cookie
//!
//! # Cart
//! GET  /api/cart?userid=        - Saved cart entries
//! POST /api/cart?userid=        - Replace cart entries
//! PUT  /api/cart?userid=        - Replace cart entries
//!
//! # Catalog
//! GET  /api/schools             - All schools
//! GET  /api/grades?school_id=   - Grades of a school
//! GET  /api/classes?school_id=&grade_id=
//! GET  /api/equipment?school_id=&grade_id=&class_id=
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;

use axum::{
    Router,
    body::Bytes,
    extract::{FromRequestParts, Query},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// JSON response body serialized with `serde_json`.
///
/// Unlike `axum::Json`, a serialization failure is reported through
/// [`AppError::Encoding`] so it is logged and gets the usual error body.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                bytes,
            )
                .into_response(),
            Err(err) => AppError::from(err).into_response(),
        }
    }
}

/// Query string extractor whose rejection is the usual JSON error body.
///
/// Wraps `axum::extract::Query`; a query that fails to deserialize (such as
/// a repeated parameter) becomes [`AppError::MalformedQuery`].
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Decode a JSON request body.
///
/// The `Content-Type` header is not checked; browsers posting from plain
/// `fetch` calls frequently omit it.
///
/// # Errors
///
/// Returns `AppError::MalformedBody` if the body is not valid JSON for `T`.
pub fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AppError::MalformedBody(e.to_string()))
}

/// Treat an empty query value the same as an absent one.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Build a `MissingParameter` error naming every absent parameter.
fn missing_parameters(params: &[(&str, bool)]) -> AppError {
    let names: Vec<&str> = params
        .iter()
        .filter(|(_, missing)| *missing)
        .map(|(name, _)| *name)
        .collect();
    AppError::MissingParameter(names.join(", "))
}

/// Fallback for methods an endpoint does not serve.
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            post(auth::login).fallback(method_not_allowed),
        )
        .route(
            "/auth/status",
            get(auth::status).fallback(method_not_allowed),
        )
        .route(
            "/logout",
            post(auth::logout).fallback(method_not_allowed),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route(
        "/cart",
        get(cart::show)
            .post(cart::replace)
            .put(cart::replace)
            .fallback(method_not_allowed),
    )
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/schools", get(catalog::schools).fallback(method_not_allowed))
        .route("/grades", get(catalog::grades).fallback(method_not_allowed))
        .route("/classes", get(catalog::classes).fallback(method_not_allowed))
        .route(
            "/equipment",
            get(catalog::equipment).fallback(method_not_allowed),
        )
}

/// Create all routes for the gateway.
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(auth_routes())
            .merge(cart_routes())
            .merge(catalog_routes()),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::GatewayConfig;
    use crate::state::AppState;

    /// Router and state over the built-in mock data.
    pub async fn mock_app(config: GatewayConfig) -> (Router, AppState) {
        let state = AppState::with_mock_data(config).await;
        (crate::app(state.clone()), state)
    }

    /// Send one request through the router and decode the JSON reply.
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, set_cookie, json)
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
        Request::get(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// `name=value` pair from a `Set-Cookie` header, for replaying as `Cookie`.
    pub fn cookie_pair(set_cookie: &str) -> String {
        set_cookie.split(';').next().unwrap().trim().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    use super::test_support::{get, mock_app, send};
    use super::*;
    use crate::config::GatewayConfig;

    #[test]
    fn test_missing_parameters_lists_every_name() {
        let err = missing_parameters(&[("school_id", true), ("grade_id", false), ("class_id", true)]);
        assert_eq!(
            err.to_string(),
            "Missing required query parameter: school_id, class_id"
        );
    }

    #[test]
    fn test_decode_body_rejects_garbage() {
        let result: Result<Vec<u32>> = decode_body(&Bytes::from_static(b"[1, 2,"));
        assert!(matches!(result, Err(AppError::MalformedBody(_))));

        let decoded: Vec<u32> = decode_body(&Bytes::from_static(b"[1, 2]")).unwrap();
        assert_eq!(decoded, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = mock_app(GatewayConfig::default()).await;
        let response = tower::ServiceExt::oneshot(app, get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sentry_layers_pass_requests_through() {
        let (app, _) = mock_app(GatewayConfig::default()).await;
        let app = crate::with_sentry_layers(app);

        let response = tower::ServiceExt::oneshot(app.clone(), get("/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));

        let (status, _, body) = send(&app, get("/api/grades")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required query parameter: school_id");
    }

    #[tokio::test]
    async fn test_unsupported_methods_return_json_405() {
        let (app, _) = mock_app(GatewayConfig::default()).await;

        for (method, uri) in [
            ("GET", "/api/login"),
            ("DELETE", "/api/cart?userid=1"),
            ("PATCH", "/api/cart?userid=1"),
            ("POST", "/api/schools"),
            ("GET", "/api/logout"),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let (status, _, body) = send(&app, request).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
            assert_eq!(body["error"], "Method not allowed");
        }
    }
}
