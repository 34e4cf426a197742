//! Integration test harness for the `SchoolKit` gateway.
//!
//! [`TestServer::spawn`] starts the complete router (the same one the binary
//! serves) on `127.0.0.1:0` over fresh in-memory state seeded with the mock
//! data. The server task is aborted when the handle is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! let server = TestServer::spawn(GatewayConfig::default()).await?;
//! let resp = TestServer::client()?
//!     .get(server.url("/health"))
//!     .send()
//!     .await?;
//! assert_eq!(resp.status(), 200);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use reqwest::Client;
use schoolkit_gateway::config::GatewayConfig;
use schoolkit_gateway::state::AppState;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use schoolkit_gateway::middleware::SESSION_COOKIE_NAME;

/// A gateway instance listening on an ephemeral port.
pub struct TestServer {
    addr: SocketAddr,
    state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a gateway with mock data and the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the listener cannot be bound.
    pub async fn spawn(config: GatewayConfig) -> std::io::Result<Self> {
        let state = AppState::with_mock_data(config).await;
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = schoolkit_gateway::app(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// The server's shared state, for asserting on the stores directly.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// HTTP client that keeps cookies between requests, like a browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn client() -> reqwest::Result<Client> {
        Client::builder().cookie_store(true).build()
    }

    /// HTTP client without a cookie store, for replaying cookies by hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built.
    pub fn bare_client() -> reqwest::Result<Client> {
        Client::builder().build()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Extract the session token from a login response's `Set-Cookie` header.
#[must_use]
pub fn session_token_from(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, token)| token.to_string())
}
