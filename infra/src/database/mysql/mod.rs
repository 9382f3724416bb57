//! MySQL implementations of the core repository traits

mod company_repository_impl;
mod user_repository_impl;

pub use company_repository_impl::MySqlCompanyRepository;
pub use user_repository_impl::MySqlUserRepository;

use cs_core::errors::DomainError;

/// Translates a SQLx failure into the domain taxonomy
///
/// Uniqueness violations (MySQL error 1062) become `DuplicateResource`; the
/// driver detail of anything else stays in the logs.
pub(crate) fn map_sqlx_error(resource: &str, operation: &str, error: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return DomainError::duplicate(resource);
        }
    }

    tracing::error!(
        resource = resource,
        operation = operation,
        error = %error,
        "Database operation failed"
    );
    DomainError::internal(format!("Failed to {} {}", operation, resource.to_lowercase()))
}
