//! Business services containing domain logic and use cases.

pub mod access;
pub mod company;
pub mod credential;
pub mod identifier;
pub mod token;

// Re-export commonly used types
pub use access::{extract_bearer_token, AccessGate};
pub use company::{CompanyService, CompanyServiceConfig};
pub use credential::{CredentialStore, CredentialStoreConfig};
pub use identifier::{IdGenerator, IdentifierAllocator};
pub use token::{TokenService, TokenServiceConfig, TokenValidator};
