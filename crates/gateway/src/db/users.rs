//! User registry.
//!
//! Loaded once at startup and never mutated, so it is shared without locking.

use secrecy::SecretString;

use schoolkit_core::{Identity, UserId};

/// A registered user: public identity plus the password it logs in with.
///
/// `Debug` output of the password is redacted by `SecretString`.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub identity: Identity,
    pub password: SecretString,
}

impl UserRecord {
    #[must_use]
    pub fn new(user_id: &str, username: &str, password: &str) -> Self {
        Self {
            identity: Identity::new(user_id, username),
            password: SecretString::from(password),
        }
    }
}

/// Immutable registry of users, in registration order.
#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: Vec<UserRecord>,
}

impl UserRegistry {
    /// Create a registry from a list of records.
    #[must_use]
    pub const fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// All records in registration order.
    pub fn records(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.iter()
    }

    /// Look up a user's identity by ID.
    #[must_use]
    pub fn get_by_id(&self, user_id: &UserId) -> Option<&Identity> {
        self.users
            .iter()
            .map(|record| &record.identity)
            .find(|identity| &identity.user_id == user_id)
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
