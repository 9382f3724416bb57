use std::sync::Arc;

use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockUserRepository;
use crate::services::credential::{verify_password, CredentialStore, CredentialStoreConfig};

fn store() -> CredentialStore<MockUserRepository> {
    CredentialStore::new(
        Arc::new(MockUserRepository::new()),
        CredentialStoreConfig { bcrypt_cost: 4 },
    )
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let store = store();

    store.register("alice", "secret123").await.unwrap();

    let hash = store.fetch_hash("alice").await.unwrap();
    assert_ne!(hash, "secret123");
    assert!(hash.starts_with("$2"));
    assert!(verify_password("secret123", &hash).await.unwrap());
    assert!(!verify_password("secret124", &hash).await.unwrap());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let store = store();

    store.register("alice", "secret123").await.unwrap();
    let result = store.register("alice", "different").await;

    assert!(matches!(result, Err(DomainError::DuplicateResource { .. })));
    let hash = store.fetch_hash("alice").await.unwrap();
    assert!(verify_password("secret123", &hash).await.unwrap());
}

#[tokio::test]
async fn test_same_password_gets_distinct_salts() {
    let store = store();

    store.register("alice", "secret123").await.unwrap();
    store.register("bob", "secret123").await.unwrap();

    let alice = store.fetch_hash("alice").await.unwrap();
    let bob = store.fetch_hash("bob").await.unwrap();
    assert_ne!(alice, bob);
}

#[tokio::test]
async fn test_fetch_hash_unknown_user() {
    let result = store().fetch_hash("nobody").await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let store = store();

    let result = store.register("", "secret123").await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));

    let result = store.register("alice", "").await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_malformed_hash_is_a_mismatch() {
    assert!(!verify_password("secret123", "not-a-bcrypt-hash").await.unwrap());
}
