//! # Company Service Core
//!
//! Core business logic and domain layer for the company service.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    verify_legal_type, Claims, Company, CompanyPatch, IssuedToken, LegalType, NewCompany, User,
};
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{
    CompanyRepository, MockCompanyRepository, MockUserRepository, UserRepository,
};
pub use services::{
    extract_bearer_token, AccessGate, CompanyService, CompanyServiceConfig, CredentialStore,
    CredentialStoreConfig, IdentifierAllocator, TokenService, TokenServiceConfig, TokenValidator,
};
