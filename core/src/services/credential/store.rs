//! Credential store implementation

use std::sync::Arc;

use tokio::task;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Configuration for the credential store
#[derive(Debug, Clone)]
pub struct CredentialStoreConfig {
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for CredentialStoreConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&cs_shared::PasswordConfig> for CredentialStoreConfig {
    fn from(config: &cs_shared::PasswordConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Stores usernames with salted bcrypt hashes of their passwords
pub struct CredentialStore<U: UserRepository> {
    repository: Arc<U>,
    config: CredentialStoreConfig,
}

impl<U: UserRepository> CredentialStore<U> {
    /// Creates a new credential store
    pub fn new(repository: Arc<U>, config: CredentialStoreConfig) -> Self {
        Self { repository, config }
    }

    /// Cost factor used for new hashes
    pub fn bcrypt_cost(&self) -> u32 {
        self.config.bcrypt_cost
    }

    /// Hashes `password` and persists it under `username`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Credentials stored
    /// * `Err(DomainError::DuplicateResource)` - Username already registered
    /// * `Err(DomainError::Validation)` - Empty username or password
    pub async fn register(&self, username: &str, password: &str) -> DomainResult<()> {
        if username.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        let hash = hash_password(password, self.config.bcrypt_cost).await?;
        let user = User::new(username, hash);

        match self.repository.create(&user).await {
            Ok(()) => {
                tracing::info!(
                    username = username,
                    event = "user_registered",
                    "Registered new user"
                );
                Ok(())
            }
            Err(e @ DomainError::DuplicateResource { .. }) => {
                tracing::debug!(username = username, "Username already registered");
                Err(e)
            }
            Err(e) => {
                tracing::error!(
                    username = username,
                    error = %e,
                    event = "user_store_failed",
                    "Failed to store credentials"
                );
                Err(e)
            }
        }
    }

    /// Looks up the stored hash for `username`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The bcrypt hash
    /// * `Err(DomainError::NotFound)` - No such user
    pub async fn fetch_hash(&self, username: &str) -> DomainResult<String> {
        self.repository
            .find_by_username(username)
            .await?
            .map(|user| user.password_hash)
            .ok_or_else(|| DomainError::not_found("User"))
    }
}

async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    let password = password.to_owned();
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// Constant-time comparison of `password` against a stored bcrypt hash
///
/// A malformed hash counts as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let verified = task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::internal(format!("Verification task failed: {}", e)))?;

    Ok(verified.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored password hash could not be parsed");
        false
    }))
}
