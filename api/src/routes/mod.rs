//! Route handlers grouped by resource

pub mod auth;
pub mod companies;
pub mod health;
