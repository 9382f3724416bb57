//! End-to-end flow across credentials, tokens, the gate and companies

use std::sync::Arc;

use crate::domain::entities::company::{CompanyPatch, LegalType, NewCompany};
use crate::errors::DomainError;
use crate::repositories::{MockCompanyRepository, MockUserRepository};
use crate::services::access::AccessGate;
use crate::services::company::CompanyService;
use crate::services::credential::{CredentialStore, CredentialStoreConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

#[tokio::test]
async fn test_alice_registers_signs_in_and_manages_acme() {
    let credentials = Arc::new(CredentialStore::new(
        Arc::new(MockUserRepository::new()),
        CredentialStoreConfig { bcrypt_cost: 4 },
    ));
    let tokens = Arc::new(
        TokenService::new(Arc::clone(&credentials), TokenServiceConfig::default()).unwrap(),
    );
    let gate = AccessGate::new(tokens.clone());
    let companies = CompanyService::new(Arc::new(MockCompanyRepository::new()));

    credentials.register("alice", "secret123").await.unwrap();
    assert!(matches!(
        credentials.register("alice", "secret123").await,
        Err(DomainError::DuplicateResource { .. })
    ));

    assert!(matches!(
        tokens.issue("alice", "wrong").await,
        Err(DomainError::AuthenticationFailed)
    ));
    let issued = tokens.issue("alice", "secret123").await.unwrap();
    let header = format!("Bearer {}", issued.access_token);

    let acme = NewCompany {
        name: "Acme".to_string(),
        description: String::new(),
        employees: 10,
        registration_status: true,
        legal_type: LegalType::Corporations,
    };
    assert!(matches!(
        gate.guard(None, |_| companies.create(acme.clone())).await,
        Err(DomainError::AuthenticationRequired)
    ));
    let created = gate
        .guard(Some(&header), |_| companies.create(acme.clone()))
        .await
        .unwrap();

    let patch = CompanyPatch {
        description: Some("Anvils".to_string()),
        ..Default::default()
    };
    let updated = gate
        .guard(Some(&header), |_| companies.update(created.id, patch))
        .await
        .unwrap();
    assert_eq!(updated.description, "Anvils");
    assert_eq!(companies.get(created.id).await.unwrap(), updated);

    gate.guard(Some(&header), |_| companies.delete(created.id))
        .await
        .unwrap();
    assert!(matches!(
        gate.guard(Some(&header), |_| companies.delete(created.id)).await,
        Err(DomainError::NotFound { .. })
    ));
}
