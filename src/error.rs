//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::FieldValidationError;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for field values and command arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A required positional argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// Command-specific usage guidance, shown to the user as-is
    #[error("{0}")]
    Usage(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a contact's phone number
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: identifier.into(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FieldValidationError> for ContactsError {
    fn from(err: FieldValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactsResult<T> = Result<T, ContactsError>;
