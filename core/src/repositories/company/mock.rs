//! In-memory implementation of CompanyRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::company::Company;
use crate::errors::DomainError;

use super::trait_::CompanyRepository;

/// Mock company repository
///
/// Mirrors the MySQL behaviour: updates that leave the row identical report
/// `NoModification`, inserts with a taken id report `DuplicateResource`.
pub struct MockCompanyRepository {
    companies: Arc<RwLock<HashMap<Uuid, Company>>>,
    unavailable: AtomicBool,
    exists_calls: AtomicUsize,
}

impl MockCompanyRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            companies: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
            exists_calls: AtomicUsize::new(0),
        }
    }

    /// Create a repository pre-populated with companies
    pub fn with_companies(companies: impl IntoIterator<Item = Company>) -> Self {
        let map = companies.into_iter().map(|c| (c.id, c)).collect();
        Self {
            companies: Arc::new(RwLock::new(map)),
            ..Self::new()
        }
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of existence checks served so far
    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    /// Number of stored companies
    pub async fn len(&self) -> usize {
        self.companies.read().await.len()
    }

    /// Remove a company behind the service's back
    pub async fn remove_silently(&self, id: Uuid) -> Option<Company> {
        self.companies.write().await.remove(&id)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::internal("company store unavailable"));
        }
        Ok(())
    }
}

impl Default for MockCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepository {
    async fn exists(&self, id: Uuid) -> Result<bool, DomainError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.companies.read().await.contains_key(&id))
    }

    async fn create(&self, company: &Company) -> Result<(), DomainError> {
        self.check_available()?;
        let mut companies = self.companies.write().await;

        if companies.contains_key(&company.id) {
            return Err(DomainError::duplicate("Company"));
        }

        companies.insert(company.id, company.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, DomainError> {
        self.check_available()?;
        Ok(self.companies.read().await.get(&id).cloned())
    }

    async fn update(&self, company: &Company) -> Result<(), DomainError> {
        self.check_available()?;
        let mut companies = self.companies.write().await;

        match companies.get_mut(&company.id) {
            None => Err(DomainError::not_found("Company")),
            Some(stored) if stored == company => Err(DomainError::NoModification),
            Some(stored) => {
                *stored = company.clone();
                Ok(())
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.companies.write().await.remove(&id).is_some())
    }
}
