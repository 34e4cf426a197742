//! Cart store.
//!
//! One ordered list of cart entries per user. Writes replace the whole list
//! (last writer wins); there is no per-entry merge.

use moka::future::Cache;

use schoolkit_core::{CartEntry, UserId};

/// Concurrent user to cart table.
///
/// Cheaply cloneable; clones share the same table.
#[derive(Clone)]
pub struct CartStore {
    cache: Cache<UserId, Vec<CartEntry>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().name("carts").build(),
        }
    }

    /// Get a user's cart entries, or an empty list if they have none.
    pub async fn get(&self, user_id: &UserId) -> Vec<CartEntry> {
        self.cache.get(user_id).await.unwrap_or_default()
    }

    /// Replace a user's cart entries wholesale.
    pub async fn replace(&self, user_id: UserId, entries: Vec<CartEntry>) {
        self.cache.insert(user_id, entries).await;
    }
}
