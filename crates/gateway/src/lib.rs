//! `SchoolKit` gateway library.
//!
//! A session-authenticated HTTP API serving catalog lookups and per-user
//! carts from in-memory stores. The binary in `main.rs` wires [`app`] to a
//! TCP listener; tests drive the same router in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, body::Body, http::Request, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete router: `/health`, the API routes and the middleware stack.
///
/// Sentry layers are added separately with [`with_sentry_layers`].
pub fn app(state: AppState) -> Router {
    let cors = middleware::cors_layer(&state.config().cors_origin);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
            user_id = tracing::field::Empty,
        )
    });

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(trace)
        .layer(cors)
        .with_state(state)
}

/// Wrap a router in the Sentry hub and HTTP transaction layers.
///
/// Outermost, for full request coverage. Without an initialized Sentry
/// client the layers pass requests through untouched.
pub fn with_sentry_layers(app: Router) -> Router {
    app.layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
