//! Domain error types.

use storage::StorageError;
use thiserror::Error;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// An error occurred in the store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    pub(crate) fn not_found(entity: &'static str) -> Self {
        metrics::counter!("domain_not_found_total", "entity" => entity).increment(1);
        DomainError::NotFound { entity }
    }
}

/// Errors raised while coercing request fields into typed commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Field {field} must not contain control characters")]
    ControlCharacter { field: &'static str },

    #[error("Field {field} must be at most {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("Field {field} must be a number (got {value})")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field {field} must not be negative (got {value})")]
    NegativeNumber { field: &'static str, value: f64 },

    #[error("Field {field} must be an integer (got {value})")]
    InvalidInteger { field: &'static str, value: String },
}
