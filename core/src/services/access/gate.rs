//! Access gate implementation

use std::future::Future;
use std::sync::Arc;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult};
use crate::services::token::TokenValidator;

/// Authorization scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";

/// Pulls the token out of an `Authorization` value of the form `Bearer <token>`
pub fn extract_bearer_token(authorization: &str) -> Option<&str> {
    authorization
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Requires a valid bearer token before an operation may run
#[derive(Clone)]
pub struct AccessGate {
    validator: Arc<dyn TokenValidator>,
}

impl AccessGate {
    /// Creates a gate backed by the given validator
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }

    /// Checks an `Authorization` value
    ///
    /// Every failure, whether missing header, other scheme or rejected token,
    /// collapses into `AuthenticationRequired`.
    pub fn authorize(&self, authorization: Option<&str>) -> DomainResult<Claims> {
        let Some(token) = authorization.and_then(extract_bearer_token) else {
            tracing::debug!("Missing or malformed bearer credentials");
            return Err(DomainError::AuthenticationRequired);
        };

        self.validator
            .validate_token(token)
            .map_err(|_| DomainError::AuthenticationRequired)
    }

    /// Runs `operation` only when `authorization` carries a valid token
    pub async fn guard<F, Fut, T>(&self, authorization: Option<&str>, operation: F) -> DomainResult<T>
    where
        F: FnOnce(Claims) -> Fut,
        Fut: Future<Output = DomainResult<T>>,
    {
        let claims = self.authorize(authorization)?;
        operation(claims).await
    }
}
