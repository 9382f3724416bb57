//! User entity holding the persisted side of a credential pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user
///
/// Only the derived password hash is ever stored; the raw password never
/// leaves the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name
    pub username: String,

    /// bcrypt hash in modular crypt format
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the user signed up
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
