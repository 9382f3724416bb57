//! Company service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::company::{Company, CompanyPatch, NewCompany};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CompanyRepository;
use crate::services::identifier::IdentifierAllocator;

/// Configuration for the company service
#[derive(Debug, Clone)]
pub struct CompanyServiceConfig {
    /// Inserts attempted when the allocated identifier is taken concurrently
    pub insert_attempts: usize,
}

impl Default for CompanyServiceConfig {
    fn default() -> Self {
        Self { insert_attempts: 3 }
    }
}

/// Create, read, sparse-update and delete for companies
pub struct CompanyService<R: CompanyRepository> {
    repository: Arc<R>,
    allocator: IdentifierAllocator<R>,
    config: CompanyServiceConfig,
}

impl<R: CompanyRepository> CompanyService<R> {
    /// Creates a service with the default allocator
    pub fn new(repository: Arc<R>) -> Self {
        let allocator = IdentifierAllocator::new(Arc::clone(&repository));
        Self::with_allocator(repository, allocator, CompanyServiceConfig::default())
    }

    /// Creates a service with an explicit allocator and configuration
    pub fn with_allocator(
        repository: Arc<R>,
        allocator: IdentifierAllocator<R>,
        config: CompanyServiceConfig,
    ) -> Self {
        Self {
            repository,
            allocator,
            config,
        }
    }

    /// Stores a new company under a freshly allocated identifier
    ///
    /// # Returns
    ///
    /// * `Ok(Company)` - The stored record, identifier included
    /// * `Err(DomainError::Validation)` - Field rules violated
    /// * `Err(DomainError::AllocationUnavailable)` - No identifier could be allocated
    /// * `Err(DomainError::DuplicateResource)` - A uniqueness constraint rejected the row
    pub async fn create(&self, new_company: NewCompany) -> DomainResult<Company> {
        new_company.validate()?;

        for attempt in 1..=self.config.insert_attempts {
            let id = self.allocator.allocate().await?;
            let company = new_company.clone().into_company(id);

            match self.repository.create(&company).await {
                Ok(()) => {
                    tracing::info!(
                        company_id = %id,
                        event = "company_created",
                        "Created company"
                    );
                    return Ok(company);
                }
                Err(e @ DomainError::DuplicateResource { .. }) => {
                    if !matches!(self.repository.exists(id).await, Ok(true)) {
                        return Err(e);
                    }
                    tracing::warn!(
                        company_id = %id,
                        attempt = attempt,
                        event = "id_taken_on_insert",
                        "Allocated identifier was taken before insert, re-allocating"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        event = "company_insert_failed",
                        "Failed to insert company"
                    );
                    return Err(e);
                }
            }
        }

        Err(DomainError::AllocationUnavailable)
    }

    /// Fetches a company
    ///
    /// # Returns
    ///
    /// * `Ok(Company)` - Company found
    /// * `Err(DomainError::NotFound)` - No company with that identifier
    pub async fn get(&self, id: Uuid) -> DomainResult<Company> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company"))
    }

    /// Applies the supplied fields of `patch` and returns the resulting record
    ///
    /// A patch that changes nothing succeeds without writing. When the row
    /// changes or disappears between fetch and write, the outcome is
    /// `NoModification`.
    pub async fn update(&self, id: Uuid, patch: CompanyPatch) -> DomainResult<Company> {
        patch.validate()?;

        let current = self.get(id).await?;
        let merged = patch.apply_to(&current);

        if merged == current {
            tracing::debug!(company_id = %id, "Patch leaves company unchanged");
            return Ok(current);
        }

        match self.repository.update(&merged).await {
            Ok(()) => {
                tracing::info!(
                    company_id = %id,
                    event = "company_updated",
                    "Updated company"
                );
                Ok(merged)
            }
            Err(DomainError::NotFound { .. }) | Err(DomainError::NoModification) => {
                tracing::warn!(
                    company_id = %id,
                    event = "company_changed_concurrently",
                    "Company changed between fetch and update"
                );
                Err(DomainError::NoModification)
            }
            Err(e) => Err(e),
        }
    }

    /// Removes a company
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Company removed
    /// * `Err(DomainError::NotFound)` - Nothing matched
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Company"));
        }

        tracing::info!(
            company_id = %id,
            event = "company_deleted",
            "Deleted company"
        );
        Ok(())
    }
}
