//! Cart route handlers.
//!
//! A cart is the full list of saved entries for one user, addressed by the
//! `userid` query parameter. Writes replace the whole list.
//!
//! With [`CartBinding::Session`] the caller must hold a session for the
//! user they address; otherwise `userid` is taken at face value.

use axum::{body::Bytes, extract::State};
use axum_extra::extract::cookie::CookieJar;
use schoolkit_core::{CartEntry, UserId};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use super::{ApiJson, ApiQuery, decode_body, missing_parameters, non_empty};
use crate::config::CartBinding;
use crate::error::{AppError, Result};
use crate::middleware::session_token;
use crate::state::AppState;

/// Query parameters for the cart endpoint.
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub userid: Option<String>,
}

/// Resolve the user whose cart the request addresses.
async fn cart_owner(state: &AppState, jar: &CookieJar, query: CartQuery) -> Result<UserId> {
    let user_id = non_empty(query.userid)
        .map(UserId::new)
        .ok_or_else(|| missing_parameters(&[("userid", true)]))?;

    if state.config().cart_binding == CartBinding::Session {
        let identity = state.auth().authorize(session_token(jar)).await?;
        if identity.user_id != user_id {
            tracing::warn!(
                session_user = %identity.user_id,
                requested_user = %user_id,
                "Cart access for another user refused"
            );
            return Err(AppError::Forbidden(format!(
                "user {} may not access cart of user {user_id}",
                identity.user_id
            )));
        }
    }

    Ok(user_id)
}

/// Return the saved cart entries (empty if none were saved).
#[instrument(skip(state, jar))]
pub async fn show(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiQuery(query): ApiQuery<CartQuery>,
) -> Result<ApiJson<Vec<CartEntry>>> {
    let user_id = cart_owner(&state, &jar, query).await?;
    Ok(ApiJson(state.carts().get(&user_id).await))
}

/// Replace the cart with the entries in the request body.
#[instrument(skip(state, jar, body))]
pub async fn replace(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiQuery(query): ApiQuery<CartQuery>,
    body: Bytes,
) -> Result<ApiJson<Value>> {
    let user_id = cart_owner(&state, &jar, query).await?;
    let entries: Vec<CartEntry> = decode_body(&body)?;

    tracing::info!(user_id = %user_id, entries = entries.len(), "Cart replaced");
    state.carts().replace(user_id, entries).await;

    Ok(ApiJson(json!({ "message": "Cart updated successfully" })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;

    use super::super::test_support::{
        cookie_pair, get, get_with_cookie, mock_app, post_json, send,
    };
    use crate::config::{CartBinding, GatewayConfig};

    const ENTRY: &str = r#"[{
        "id": "cart-9",
        "timestamp": 1700000100,
        "school": {"id": "3", "name": "Brener"},
        "grade": {"id": "10", "name": "10th Grade"},
        "items": [{"id": "901", "name": "Binder (3-ring)", "quantity": 2}]
    }]"#;

    fn put_json(uri: &str, body: &str) -> Request<Body> {
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn session_bound() -> GatewayConfig {
        GatewayConfig {
            cart_binding: CartBinding::Session,
            ..GatewayConfig::default()
        }
    }

    #[tokio::test]
    async fn test_seeded_and_empty_carts() {
        let (app, _) = mock_app(GatewayConfig::default()).await;

        let (status, _, body) = send(&app, get("/api/cart?userid=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "cart-1");
        assert_eq!(body[0]["items"].as_array().unwrap().len(), 3);

        let (status, _, body) = send(&app, get("/api/cart?userid=3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_replace_then_get_returns_written_entries() {
        let (app, _) = mock_app(GatewayConfig::default()).await;

        let (status, _, body) = send(&app, post_json("/api/cart?userid=3", ENTRY)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Cart updated successfully");

        let (_, _, body) = send(&app, get("/api/cart?userid=3")).await;
        let expected: serde_json::Value = serde_json::from_str(ENTRY).unwrap();
        assert_eq!(body, expected);

        let (status, _, _) = send(&app, put_json("/api/cart?userid=3", "[]")).await;
        assert_eq!(status, StatusCode::OK);
        let (_, _, body) = send(&app, get("/api/cart?userid=3")).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_missing_userid() {
        let (app, _) = mock_app(GatewayConfig::default()).await;

        for uri in ["/api/cart", "/api/cart?userid="] {
            let (status, _, body) = send(&app, get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], "Missing required query parameter: userid");
        }
    }

    #[tokio::test]
    async fn test_repeated_userid_is_a_json_error() {
        let (app, _) = mock_app(GatewayConfig::default()).await;

        let (status, _, body) = send(&app, get("/api/cart?userid=1&userid=2")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid query string"}));

        let (status, _, body) =
            send(&app, post_json("/api/cart?userid=1&userid=2", "[]")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid query string");
    }

    #[tokio::test]
    async fn test_malformed_cart_body_leaves_cart_untouched() {
        let (app, state) = mock_app(GatewayConfig::default()).await;

        let (status, _, body) = send(&app, post_json("/api/cart?userid=1", r#"{"id":1}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Failed to decode request body");

        let cart = state.carts().get(&"1".into()).await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id.as_str(), "cart-1");
    }

    #[tokio::test]
    async fn test_session_binding_requires_login() {
        let (app, _) = mock_app(session_bound()).await;

        let (status, _, body) = send(&app, get("/api/cart?userid=1")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_session_binding_limits_carts_to_owner() {
        let (app, _) = mock_app(session_bound()).await;

        let (_, set_cookie, _) = send(
            &app,
            post_json("/api/login", r#"{"username":"admin","password":"1234"}"#),
        )
        .await;
        let cookie = cookie_pair(&set_cookie.unwrap());

        let (status, _, body) = send(&app, get_with_cookie("/api/cart?userid=2", &cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "cart-2");

        let (status, _, body) = send(&app, get_with_cookie("/api/cart?userid=1", &cookie)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Forbidden");
    }
}
