//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::db::{CartStore, Catalog, SessionStore, UserRegistry, mock};
use crate::services::auth::AuthService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// shared stores and configuration. The stores live as long as the process.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GatewayConfig,
    users: UserRegistry,
    catalog: Catalog,
    sessions: SessionStore,
    carts: CartStore,
}

impl AppState {
    /// Create application state with empty session and cart stores.
    ///
    /// # Arguments
    ///
    /// * `config` - Gateway configuration
    /// * `users` - User registry (immutable for the life of the process)
    /// * `catalog` - Catalog tables
    #[must_use]
    pub fn new(config: GatewayConfig, users: UserRegistry, catalog: Catalog) -> Self {
        let sessions = SessionStore::new(config.session_ttl);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                users,
                catalog,
                sessions,
                carts: CartStore::new(),
            }),
        }
    }

    /// Create application state loaded with the built-in mock data.
    ///
    /// Users, catalog, and the initial carts come from [`mock`].
    pub async fn with_mock_data(config: GatewayConfig) -> Self {
        let state = Self::new(config, mock::users(), mock::catalog());
        for (user_id, entries) in mock::carts() {
            state.carts().replace(user_id, entries).await;
        }
        state
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Get a reference to the user registry.
    #[must_use]
    pub fn users(&self) -> &UserRegistry {
        &self.inner.users
    }

    /// Get a reference to the catalog tables.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    /// Authentication service over this state's registry and session store.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.users, &self.inner.sessions)
    }
}
