//! Tests for the user repository

#[cfg(test)]
mod mock_tests;
