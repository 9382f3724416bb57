//! Main token service implementation

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tokio::task;

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::credential::{verify_password, CredentialStore};

use super::config::TokenServiceConfig;

/// Input for the throwaway hash compared against when the user is unknown
const DUMMY_PASSWORD: &str = "dummy-password-for-timing-parity";

/// Stateless check of an encoded access token
pub trait TokenValidator: Send + Sync {
    /// Returns the verified claims or `DomainError::InvalidToken`
    fn validate_token(&self, token: &str) -> DomainResult<Claims>;
}

/// Service for issuing and validating JWT access tokens
pub struct TokenService<U: UserRepository> {
    credentials: Arc<CredentialStore<U>>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    dummy_hash: Arc<str>,
}

impl<U: UserRepository> TokenService<U> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `credentials` - Store holding the password hashes
    /// * `config` - Token service configuration
    ///
    /// The throwaway hash for unknown users is derived here, at the store's
    /// cost, so the first failed sign-in costs the same as every later one.
    /// Fails with `Internal` when that cost is not a valid bcrypt cost.
    pub fn new(
        credentials: Arc<CredentialStore<U>>,
        config: TokenServiceConfig,
    ) -> DomainResult<Self> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, credentials.bcrypt_cost())
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))?;

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Ok(Self {
            credentials,
            config,
            encoding_key,
            decoding_key,
            validation,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Checks the credentials and issues a signed access token
    ///
    /// Unknown user and wrong password produce the same error, and both pay
    /// for one bcrypt verification.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Credentials matched
    /// * `Err(DomainError::AuthenticationFailed)` - Unknown user or wrong password
    /// * `Err(DomainError::Internal)` - Store or signing failure
    pub async fn issue(&self, username: &str, password: &str) -> DomainResult<IssuedToken> {
        let verified = match self.credentials.fetch_hash(username).await {
            Ok(hash) => verify_password(password, &hash).await?,
            Err(DomainError::NotFound { .. }) => {
                self.verify_against_dummy(password).await?;
                false
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event = "credential_lookup_failed",
                    "Failed to fetch stored credentials"
                );
                return Err(e);
            }
        };

        if !verified {
            tracing::info!(
                username = username,
                event = "sign_in_failed",
                "Rejected sign-in attempt"
            );
            return Err(DomainError::AuthenticationFailed);
        }

        let claims = Claims::new_access_token(
            username,
            Duration::seconds(self.config.access_token_expiry_seconds),
            &self.config.issuer,
            &self.config.audience,
        );
        let token = self.encode_jwt(&claims)?;

        tracing::info!(
            username = username,
            token_id = %claims.jti,
            event = "token_issued",
            "Issued access token"
        );

        Ok(IssuedToken::new(token, &claims))
    }

    /// Verifies signature, algorithm, issuer, audience, not-before and expiry
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The token is valid
    /// * `Err(DomainError::InvalidToken)` - Any check failed
    pub fn validate(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Token rejected");
                DomainError::InvalidToken
            })
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Token signing failed: {}", e)))
    }

    async fn verify_against_dummy(&self, password: &str) -> DomainResult<()> {
        let dummy_hash = Arc::clone(&self.dummy_hash);
        let password = password.to_owned();

        task::spawn_blocking(move || {
            let _ = bcrypt::verify(password, &dummy_hash);
        })
        .await
        .map_err(|e| DomainError::internal(format!("Verification task failed: {}", e)))
    }
}

impl<U: UserRepository> TokenValidator for TokenService<U> {
    fn validate_token(&self, token: &str) -> DomainResult<Claims> {
        self.validate(token)
    }
}
