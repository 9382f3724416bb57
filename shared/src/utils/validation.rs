//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Usernames are ASCII letters, digits, `_`, `.` and `-`
pub static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("username pattern is a valid regex")
});

/// Longest accepted username, matching the `users.username` column
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Common validation functions
pub mod validators {
    use super::{USERNAME_MAX_LENGTH, USERNAME_PATTERN};

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string has at most `max` characters (not bytes)
    pub fn char_length_at_most(value: &str, max: usize) -> bool {
        value.chars().count() <= max
    }

    /// Check if a string is an acceptable username
    pub fn is_valid_username(value: &str) -> bool {
        !value.is_empty()
            && value.len() <= USERNAME_MAX_LENGTH
            && USERNAME_PATTERN.is_match(value)
    }
}
