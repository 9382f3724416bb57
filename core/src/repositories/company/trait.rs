//! Company repository trait defining the interface for company persistence.
//!
//! The trait is the storage port of the company lifecycle: implementations
//! translate store-specific failures into the domain taxonomy (uniqueness
//! violations into `DuplicateResource`, everything else into `Internal`) and
//! never apply business rules of their own.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::company::Company;
use crate::errors::DomainError;

/// Repository trait for Company persistence operations
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Check whether a company with the given identifier is stored
    ///
    /// # Returns
    /// * `Ok(true)` - Identifier is taken
    /// * `Ok(false)` - Identifier is free
    /// * `Err(DomainError)` - Store could not be queried
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Insert a fully populated company
    ///
    /// # Returns
    /// * `Ok(())` - Row inserted
    /// * `Err(DomainError::DuplicateResource)` - A uniqueness constraint rejected the row
    /// * `Err(DomainError)` - Any other store failure
    async fn create(&self, company: &Company) -> Result<(), DomainError>;

    /// Find a company by identifier
    ///
    /// # Returns
    /// * `Ok(Some(Company))` - Company found
    /// * `Ok(None)` - No company with that identifier
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, DomainError>;

    /// Replace every mutable field of the stored company with `company`'s values
    ///
    /// # Returns
    /// * `Ok(())` - Row changed
    /// * `Err(DomainError::NotFound)` - No row has that identifier
    /// * `Err(DomainError::NoModification)` - Row exists but the write changed nothing
    /// * `Err(DomainError::DuplicateResource)` - A uniqueness constraint rejected the values
    /// * `Err(DomainError)` - Any other store failure
    async fn update(&self, company: &Company) -> Result<(), DomainError>;

    /// Delete a company
    ///
    /// # Returns
    /// * `Ok(true)` - Company was deleted
    /// * `Ok(false)` - Company not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
