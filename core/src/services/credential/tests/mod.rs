//! Tests for the credential store

#[cfg(test)]
mod store_tests;
