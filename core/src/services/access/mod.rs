//! Access gate guarding mutating operations behind a bearer token

mod gate;

#[cfg(test)]
mod tests;

pub use gate::{extract_bearer_token, AccessGate, BEARER_PREFIX};
