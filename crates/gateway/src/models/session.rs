//! Session record held by the session store.

use chrono::{DateTime, Utc};

use schoolkit_core::UserId;

/// A live login session.
///
/// Keyed by its `SessionToken` in the session store; the token itself is
/// not duplicated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// User the session authenticates as.
    pub user_id: UserId,
    /// When the session was issued.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for `user_id` issued now.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Whole seconds elapsed since the session was issued.
    #[must_use]
    pub fn age_secs(&self) -> i64 {
        (Utc::now() - self.created_at).num_seconds()
    }
}
