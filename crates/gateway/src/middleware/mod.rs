//! HTTP middleware stack for the gateway.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (preflight handling and allow-origin headers)

pub mod auth;
pub mod cors;
pub mod request_id;
pub mod session;

pub use auth::RequireAuth;
pub use cors::cors_layer;
pub use request_id::request_id_middleware;
pub use session::{SESSION_COOKIE_NAME, removal_cookie, session_cookie, session_token};
