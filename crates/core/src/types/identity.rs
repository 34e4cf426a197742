//! Authenticated user identity.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The public record of a registered user.
///
/// Never carries a password. Serialized as `{"userid": ..., "username": ...}`,
/// which is the shape returned by the login and auth-status endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "userid")]
    pub user_id: UserId,
    pub username: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}
