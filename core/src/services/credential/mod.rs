//! Credential storage: bcrypt hashing and lookup of stored hashes

mod store;

#[cfg(test)]
mod tests;

pub use store::{verify_password, CredentialStore, CredentialStoreConfig};
