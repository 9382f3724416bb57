//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Credential checks and access token issuance
//! - Stateless access token validation
//! - The `TokenValidator` seam used by the access gate

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{TokenService, TokenValidator};
