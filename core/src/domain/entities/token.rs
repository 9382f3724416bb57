//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime (5 minutes)
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 300;

/// JWT issuer
pub const JWT_ISSUER: &str = "company-service";

/// JWT audience
pub const JWT_AUDIENCE: &str = "company-service-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token issued now
    ///
    /// # Arguments
    ///
    /// * `username` - The authenticated user
    /// * `lifetime` - How long the token stays valid
    /// * `issuer` / `audience` - Values checked again at validation time
    pub fn new_access_token(
        username: &str,
        lifetime: Duration,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The authenticated username
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Absolute expiry instant
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Signed token returned to the client after sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Encoded JWT
    pub access_token: String,

    /// Authorization scheme the token is presented with
    pub token_type: String,

    /// Seconds until expiry, counted from issuance
    pub expires_in: i64,

    /// Absolute expiry instant
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// Wraps an encoded token together with the claims it was built from
    pub fn new(access_token: String, claims: &Claims) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: claims.exp - claims.iat,
            expires_at: claims.expires_at(),
        }
    }
}
