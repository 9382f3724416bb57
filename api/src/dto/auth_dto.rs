use cs_core::domain::entities::token::IssuedToken;
use cs_shared::validation::validators;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Longest password bcrypt takes into account
pub const PASSWORD_MAX_BYTES: usize = 72;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 64), custom(function = "validate_username"))]
    pub username: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub username: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.access_token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
            expires_at: issued.expires_at,
        }
    }
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if validators::is_valid_username(username) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username"))
    }
}

// Counted in bytes: bcrypt silently truncates after 72
fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < 8 {
        return Err(ValidationError::new("password_too_short"));
    }
    if password.len() > PASSWORD_MAX_BYTES {
        return Err(ValidationError::new("password_too_long"));
    }
    Ok(())
}
