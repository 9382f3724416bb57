use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use super::mocks::InterferingCompanyRepository;
use crate::domain::entities::company::{CompanyPatch, LegalType, NewCompany};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{CompanyRepository, MockCompanyRepository};
use crate::services::company::{CompanyService, CompanyServiceConfig};
use crate::services::identifier::IdentifierAllocator;

fn acme() -> NewCompany {
    NewCompany {
        name: "Acme".to_string(),
        description: "Anvils".to_string(),
        employees: 10,
        registration_status: true,
        legal_type: LegalType::Corporations,
    }
}

fn service() -> (CompanyService<MockCompanyRepository>, Arc<MockCompanyRepository>) {
    let repo = Arc::new(MockCompanyRepository::new());
    (CompanyService::new(Arc::clone(&repo)), repo)
}

#[tokio::test]
async fn test_create_then_get_round_trips_all_fields() {
    let (service, _) = service();

    let created = service.create(acme()).await.unwrap();
    let fetched = service.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Acme");
    assert_eq!(fetched.description, "Anvils");
    assert_eq!(fetched.employees, 10);
    assert!(fetched.registration_status);
    assert_eq!(fetched.legal_type, LegalType::Corporations);
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let (service, repo) = service();

    let mut ids = HashSet::new();
    for _ in 0..1000 {
        let company = service.create(acme()).await.unwrap();
        assert!(ids.insert(company.id));
    }
    assert_eq!(repo.len().await, 1000);
}

#[tokio::test]
async fn test_create_validates_before_touching_store() {
    let (service, repo) = service();
    let mut invalid = acme();
    invalid.name = "Sixteen chars!!!".to_string();

    let result = service.create(invalid).await;

    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::InvalidLength { .. }))
    ));
    assert_eq!(repo.exists_calls(), 0);
}

#[tokio::test]
async fn test_create_with_unavailable_store() {
    let (service, repo) = service();
    repo.set_unavailable(true);

    let result = service.create(acme()).await;

    assert!(matches!(result, Err(DomainError::AllocationUnavailable)));
}

#[tokio::test]
async fn test_create_reallocates_after_insert_race() {
    let repo = Arc::new(InterferingCompanyRepository::new());
    let service = CompanyService::new(Arc::clone(&repo));
    repo.lose_insert_races(2);

    let created = service.create(acme()).await.unwrap();

    assert_eq!(service.get(created.id).await.unwrap().name, "Acme");
    assert_eq!(repo.inner.len().await, 3);
}

#[tokio::test]
async fn test_create_gives_up_after_repeated_races() {
    let repo = Arc::new(InterferingCompanyRepository::new());
    let allocator = IdentifierAllocator::new(Arc::clone(&repo));
    let service = CompanyService::with_allocator(
        Arc::clone(&repo),
        allocator,
        CompanyServiceConfig { insert_attempts: 2 },
    );
    repo.lose_insert_races(5);

    let result = service.create(acme()).await;

    assert!(matches!(result, Err(DomainError::AllocationUnavailable)));
}

#[tokio::test]
async fn test_get_unknown_id() {
    let (service, _) = service();

    let result = service.get(Uuid::new_v4()).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_applies_only_supplied_fields() {
    let (service, _) = service();
    let created = service.create(acme()).await.unwrap();

    let patch = CompanyPatch {
        employees: Some(250),
        legal_type: Some(LegalType::Unspecified),
        ..Default::default()
    };
    let updated = service.update(created.id, patch).await.unwrap();

    assert_eq!(updated.employees, 250);
    assert_eq!(updated.legal_type, LegalType::Corporations);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(service.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_empty_update_succeeds_without_change() {
    let (service, _) = service();
    let created = service.create(acme()).await.unwrap();

    let unchanged = service.update(created.id, CompanyPatch::default()).await.unwrap();
    assert_eq!(unchanged, created);

    let same_values = CompanyPatch {
        name: Some("Acme".to_string()),
        employees: Some(10),
        ..Default::default()
    };
    let unchanged = service.update(created.id, same_values).await.unwrap();
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn test_update_unknown_id() {
    let (service, _) = service();
    let patch = CompanyPatch {
        employees: Some(1),
        ..Default::default()
    };

    let result = service.update(Uuid::new_v4(), patch).await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_validates_fields() {
    let (service, _) = service();
    let created = service.create(acme()).await.unwrap();
    let patch = CompanyPatch {
        description: Some("x".repeat(3001)),
        ..Default::default()
    };

    let result = service.update(created.id, patch).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_update_after_concurrent_delete() {
    let repo = Arc::new(InterferingCompanyRepository::new());
    let service = CompanyService::new(Arc::clone(&repo));
    let created = service.create(acme()).await.unwrap();
    repo.delete_before_next_update();

    let patch = CompanyPatch {
        registration_status: Some(false),
        ..Default::default()
    };
    let result = service.update(created.id, patch).await;

    assert!(matches!(result, Err(DomainError::NoModification)));
}

#[tokio::test]
async fn test_delete_then_get() {
    let (service, repo) = service();
    let created = service.create(acme()).await.unwrap();

    service.delete(created.id).await.unwrap();

    assert!(matches!(
        service.get(created.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(!repo.exists(created.id).await.unwrap());
    assert!(matches!(
        service.delete(created.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
