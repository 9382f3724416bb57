//! Unit tests for mock user repository

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_mock_repository_create_and_find() {
    let repo = MockUserRepository::new();
    let user = User::new("alice", "$2b$04$hash");

    repo.create(&user).await.unwrap();

    let found = repo.find_by_username("alice").await.unwrap();
    assert_eq!(found, Some(user));
    assert!(repo.find_by_username("Alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_duplicate_username() {
    let repo = MockUserRepository::new();

    repo.create(&User::new("alice", "first")).await.unwrap();
    let result = repo.create(&User::new("alice", "second")).await;

    assert!(matches!(result, Err(DomainError::DuplicateResource { .. })));
    assert_eq!(repo.len().await, 1);
    let stored = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "first");
}
