//! Authentication route handlers
//!
//! This module contains the credential endpoints:
//! - Sign-up (registering a username and password)
//! - Sign-in (exchanging credentials for an access token)

pub mod signin;
pub mod signup;

pub use signin::signin;
pub use signup::signup;
