//! Identifier allocator implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::CompanyRepository;

/// Default number of candidates probed before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Source of candidate identifiers
pub type IdGenerator = Arc<dyn Fn() -> Uuid + Send + Sync>;

/// Allocates identifiers not currently present in the company store
///
/// The existence probe is only a pre-check: the primary key stays the source
/// of truth, and a conflict at insert time is handled by the caller.
pub struct IdentifierAllocator<R: CompanyRepository> {
    repository: Arc<R>,
    generator: IdGenerator,
    max_attempts: usize,
}

impl<R: CompanyRepository> Clone for IdentifierAllocator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            max_attempts: self.max_attempts,
        }
    }
}

impl<R: CompanyRepository> IdentifierAllocator<R> {
    /// Creates an allocator drawing random v4 UUIDs
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: Arc::new(Uuid::new_v4),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the candidate source
    pub fn with_generator(mut self, generator: IdGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Sets how many candidates are probed before failing
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Configured attempt budget
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns an identifier that was free at the time of the probe
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - A candidate absent from the store
    /// * `Err(DomainError::AllocationUnavailable)` - Budget exhausted or the store failed
    pub async fn allocate(&self) -> DomainResult<Uuid> {
        for attempt in 1..=self.max_attempts {
            let candidate = (self.generator)();

            match self.repository.exists(candidate).await {
                Ok(false) => return Ok(candidate),
                Ok(true) => {
                    tracing::warn!(
                        candidate = %candidate,
                        attempt = attempt,
                        event = "id_collision",
                        "Generated identifier already taken, drawing another"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        event = "id_probe_failed",
                        "Could not check identifier availability"
                    );
                    return Err(DomainError::AllocationUnavailable);
                }
            }
        }

        tracing::error!(
            max_attempts = self.max_attempts,
            event = "id_allocation_exhausted",
            "No free identifier found within the attempt budget"
        );
        Err(DomainError::AllocationUnavailable)
    }
}
