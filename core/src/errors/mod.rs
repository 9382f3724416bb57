//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors
///
/// Every distinguishable outcome of the core operations has its own variant so
/// the boundary layer can map each one to a stable response category.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Resource already exists: {resource}")]
    DuplicateResource { resource: String },

    #[error("No modification took place")]
    NoModification,

    #[error("Identifier generation currently unavailable")]
    AllocationUnavailable,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a uniqueness conflict
    pub fn duplicate(resource: impl Into<String>) -> Self {
        DomainError::DuplicateResource {
            resource: resource.into(),
        }
    }

    /// Shorthand for an opaque store or runtime failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        use cs_shared::error_codes;

        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::DuplicateResource { .. } => error_codes::DUPLICATE_RESOURCE,
            DomainError::NoModification => error_codes::NO_MODIFICATION,
            DomainError::AllocationUnavailable => error_codes::ALLOCATION_UNAVAILABLE,
            DomainError::AuthenticationFailed => error_codes::AUTHENTICATION_FAILED,
            DomainError::InvalidToken => error_codes::INVALID_TOKEN,
            DomainError::AuthenticationRequired => error_codes::AUTHENTICATION_REQUIRED,
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
