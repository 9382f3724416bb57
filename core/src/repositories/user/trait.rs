//! User repository trait defining the interface for credential persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user
    ///
    /// # Returns
    /// * `Ok(())` - User stored
    /// * `Err(DomainError::DuplicateResource)` - Username already taken
    /// * `Err(DomainError)` - Any other store failure
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by username (exact match)
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No such user
    /// * `Err(DomainError)` - Store failure
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
