//! HTTP boundary of the company service
//!
//! Exposed as a library so the integration tests can build the application
//! over in-memory repositories.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
