//! CORS layer built from configuration.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsOrigin;

/// Build the CORS layer for the API.
///
/// A wildcard origin cannot be combined with credentials, so cookies only
/// travel cross-origin when a specific origin is configured.
#[must_use]
pub fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match origin {
        CorsOrigin::Any => layer.allow_origin(Any),
        CorsOrigin::Exact(value) => layer.allow_origin(value.clone()).allow_credentials(true),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{HeaderValue, Request, Response, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::GatewayConfig;
    use crate::routes::test_support::mock_app;

    async fn app_with(origin: CorsOrigin) -> Router {
        let config = GatewayConfig {
            cors_origin: origin,
            ..GatewayConfig::default()
        };
        mock_app(config).await.0
    }

    async fn preflight(app: Router, origin: &str) -> Response<Body> {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/cart?userid=1")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    fn header_str<'a>(response: &'a Response<Body>, name: header::HeaderName) -> Option<&'a str> {
        response.headers().get(name).map(|v| v.to_str().unwrap())
    }

    fn assert_allows_api_methods_and_headers(response: &Response<Body>) {
        let methods = header_str(response, header::ACCESS_CONTROL_ALLOW_METHODS).unwrap();
        let methods: Vec<&str> = methods.split(',').map(str::trim).collect();
        assert_eq!(methods, ["GET", "POST", "PUT", "OPTIONS"]);

        let headers = header_str(response, header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap();
        assert_eq!(headers.to_ascii_lowercase(), "content-type");
    }

    #[tokio::test]
    async fn test_preflight_with_any_origin() {
        let response = preflight(app_with(CorsOrigin::Any).await, "https://a.org").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_allows_api_methods_and_headers(&response);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("*")
        );
        assert!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none()
        );
    }

    #[tokio::test]
    async fn test_preflight_with_exact_origin_allows_credentials() {
        let origin = CorsOrigin::Exact(HeaderValue::from_static("https://a.org"));
        let response = preflight(app_with(origin).await, "https://a.org").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_allows_api_methods_and_headers(&response);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://a.org")
        );
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_simple_request_carries_allow_origin() {
        let origin = CorsOrigin::Exact(HeaderValue::from_static("https://a.org"));
        let request = Request::get("/api/schools")
            .header(header::ORIGIN, "https://a.org")
            .body(Body::empty())
            .unwrap();
        let response = app_with(origin).await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://a.org")
        );
    }
}
