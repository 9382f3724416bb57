//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Sources are layered, later ones winning: built-in defaults for the
//! detected environment, an optional `config.<env>.toml`, `APP__SECTION__KEY`
//! environment variables, then the plain variables the deployment scripts
//! set (`DATABASE_URL`, `DBUSER`/`DBPASSWORD`/`DBENDPOINT`/`DBSCHEMA`,
//! `JWT_SECRET`, `SERVER_HOST`, `SERVER_PORT`).

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let cors = match environment {
            Environment::Development => CorsConfig::development(),
            _ => CorsConfig::default(),
        };
        let database = match environment {
            Environment::Production => DatabaseConfig::default().with_max_connections(50),
            _ => DatabaseConfig::default(),
        };

        Self {
            environment,
            server: ServerConfig::default(),
            database,
            auth: AuthConfig::default(),
            cors,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load the configuration from all sources and validate it
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();

        let defaults = config::Config::try_from(&Self::for_environment(environment))?;
        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::new(environment.config_file(), config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = settings.try_deserialize()?;
        app_config.apply_overrides(|key| std::env::var(key).ok());
        app_config.validate()?;

        Ok(app_config)
    }

    /// Apply plain, unprefixed variables on top of the layered sources
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = DatabaseConfig::url_from_parts(
            lookup("DBUSER").as_deref(),
            lookup("DBPASSWORD").as_deref(),
            lookup("DBENDPOINT").as_deref(),
            lookup("DBSCHEMA").as_deref(),
        ) {
            self.database.url = url;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = url;
        }
        if let Some(secret) = lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            self.auth.jwt.secret = secret;
        }
        if let Some(host) = lookup("SERVER_HOST").filter(|v| !v.is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
    }

    /// Reject settings the service cannot safely run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.jwt.secret.is_empty() {
            return Err(ConfigError::Invalid("JWT secret must not be empty".to_string()));
        }
        if self.environment.is_production() && self.auth.jwt.uses_default_secret() {
            return Err(ConfigError::Invalid(
                "JWT_SECRET must be set in production".to_string(),
            ));
        }
        if self.auth.jwt.access_token_expiry <= 0 {
            return Err(ConfigError::Invalid(
                "access token expiry must be positive".to_string(),
            ));
        }
        if !(4..=31).contains(&self.auth.password.bcrypt_cost) {
            return Err(ConfigError::Invalid(format!(
                "bcrypt cost must be between 4 and 31, got {}",
                self.auth.password.bcrypt_cost
            )));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database URL must not be empty".to_string()));
        }
        Ok(())
    }
}
