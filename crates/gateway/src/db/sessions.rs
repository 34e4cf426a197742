//! Session store.
//!
//! Maps session tokens to the session they authenticate. Backed by a
//! `moka` concurrent cache, so operations on different tokens never contend on
//! a global lock and every write is visible to subsequent reads from any task.
//!
//! When an idle lifetime is configured, a session that has not been looked up
//! for that long becomes invisible to `get` immediately and is evicted by the
//! cache's housekeeping later.

use std::time::Duration;

use moka::future::Cache;

use schoolkit_core::{SessionToken, UserId};

use crate::models::Session;

/// Concurrent token to session table.
///
/// Cheaply cloneable; clones share the same table.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<SessionToken, Session>,
}

impl SessionStore {
    /// Create an empty store.
    ///
    /// `idle_ttl` of `None` keeps sessions until they are deleted explicitly.
    #[must_use]
    pub fn new(idle_ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().name("sessions");
        if let Some(ttl) = idle_ttl {
            builder = builder.time_to_idle(ttl);
        }

        Self {
            cache: builder.build(),
        }
    }

    /// Insert or overwrite the session stored under `token`.
    pub async fn put(&self, token: SessionToken, session: Session) {
        self.cache.insert(token, session).await;
    }

    /// Insert `session` under `token` only if the token is not already live.
    ///
    /// Returns `true` if this call stored the session, `false` if another
    /// session already held the token (the existing session is untouched).
    pub async fn try_insert(&self, token: SessionToken, session: Session) -> bool {
        self.cache
            .entry(token)
            .or_insert_with(async move { session })
            .await
            .is_fresh()
    }

    /// Look up the user a token authenticates as.
    pub async fn get(&self, token: &SessionToken) -> Option<UserId> {
        self.cache.get(token).await.map(|session| session.user_id)
    }

    /// Remove the session stored under `token`, returning it if it was live.
    ///
    /// Removing an unknown token is a no-op.
    pub async fn delete(&self, token: &SessionToken) -> Option<Session> {
        self.cache.remove(token).await
    }

    /// Number of live sessions.
    ///
    /// Flushes pending expirations first so the count is exact at the time of
    /// the call.
    pub async fn len(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Whether there are no live sessions.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
