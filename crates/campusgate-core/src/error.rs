//! Error types for campusgate

use thiserror::Error;

/// Main error type for form-interaction operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// Screen size argument was not of the form `WIDTHxHEIGHT`
    #[error("Invalid screen size: {0}")]
    InvalidScreenSize(String),

    /// No field with the given name exists on the page
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Card index is past the end of the card sequence
    #[error("Card index {index} out of range ({len} cards)")]
    CardOutOfRange { index: usize, len: usize },

    /// System clipboard could not be read
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;
