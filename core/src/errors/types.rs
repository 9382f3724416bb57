//! Field-level validation errors
//!
//! Raised by the domain's own field rules and by the boundary layer when a
//! request cannot be turned into a domain value.

use thiserror::Error;

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Invalid legal type: {value}")]
    InvalidLegalType { value: String },

    #[error("No fields to update")]
    EmptyPatch,
}

impl ValidationError {
    /// Name of the offending field, when the error concerns a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidLength { field, .. } => Some(field),
            ValidationError::InvalidLegalType { .. } => Some("legalType"),
            ValidationError::EmptyPatch => None,
        }
    }
}
