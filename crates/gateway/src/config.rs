//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `GATEWAY_HOST` - Bind address (default: 127.0.0.1)
//! - `GATEWAY_PORT` - Listen port (default: 8080)
//! - `GATEWAY_SESSION_TTL_SECS` - Idle session lifetime in seconds (default: 7 days, `0` = never expire)
//! - `GATEWAY_SECURE_COOKIES` - Mark session cookies `Secure` and `SameSite=Strict` (default: false)
//! - `GATEWAY_CART_BINDING` - `trusted` or `session` (default: trusted)
//! - `GATEWAY_CORS_ORIGIN` - Allowed CORS origin, `*` for any (default: *)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::SecretString;
use thiserror::Error;

/// Default idle session lifetime (7 days).
const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How the cart endpoint decides whose cart a request may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartBinding {
    /// The `userid` query parameter is trusted as-is.
    #[default]
    Trusted,
    /// The caller must hold a session for the `userid` they operate on.
    Session,
}

impl FromStr for CartBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trusted" => Ok(Self::Trusted),
            "session" => Ok(Self::Session),
            other => Err(format!("expected 'trusted' or 'session', got '{other}'")),
        }
    }
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigin {
    /// Any origin (`Access-Control-Allow-Origin: *`).
    #[default]
    Any,
    /// A single origin; credentials are allowed so the session cookie travels.
    Exact(HeaderValue),
}

/// Gateway application configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Idle lifetime of a session; `None` keeps sessions until logout
    pub session_ttl: Option<Duration>,
    /// Whether session cookies carry `Secure` and `SameSite=Strict`
    pub secure_cookies: bool,
    /// Cart authorization mode
    pub cart_binding: CartBinding,
    /// Allowed CORS origin
    pub cors_origin: CorsOrigin,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<SecretString>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            session_ttl: Some(Duration::from_secs(DEFAULT_SESSION_TTL_SECS)),
            secure_cookies: false,
            cart_binding: CartBinding::Trusted,
            cors_origin: CorsOrigin::Any,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&lookup, "GATEWAY_HOST", defaults.host)?;
        let port = parse_or(&lookup, "GATEWAY_PORT", defaults.port)?;
        let ttl_secs = parse_or(&lookup, "GATEWAY_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        let secure_cookies = parse_or(&lookup, "GATEWAY_SECURE_COOKIES", defaults.secure_cookies)?;
        let cart_binding = parse_or(&lookup, "GATEWAY_CART_BINDING", defaults.cart_binding)?;

        let cors_origin = match lookup("GATEWAY_CORS_ORIGIN").as_deref().map(str::trim) {
            None | Some("" | "*") => CorsOrigin::Any,
            Some(origin) => {
                let invalid = |reason: String| {
                    ConfigError::InvalidEnvVar("GATEWAY_CORS_ORIGIN".to_string(), reason)
                };
                if !origin.starts_with("http://") && !origin.starts_with("https://") {
                    return Err(invalid("must be '*' or an http(s) origin".to_string()));
                }
                let value = HeaderValue::from_str(origin.trim_end_matches('/'))
                    .map_err(|e| invalid(e.to_string()))?;
                CorsOrigin::Exact(value)
            }
        };

        Ok(Self {
            host,
            port,
            session_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
            secure_cookies,
            cart_binding,
            cors_origin,
            sentry_dsn: lookup("SENTRY_DSN")
                .filter(|v| !v.is_empty())
                .map(SecretString::from),
            sentry_environment: lookup("SENTRY_ENVIRONMENT").filter(|v| !v.is_empty()),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset or empty.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        _ => Ok(default),
    }
}
