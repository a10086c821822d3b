//! Error types for the rubrica directory
//!
//! Every failure a directory operation can report is a variant here. None of
//! them are fatal: the HTTP adapter maps each one to a status code.

use thiserror::Error;

use crate::model::ContactKey;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the rubrica directory
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field was absent or empty
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// The contact key is already occupied
    #[error("Contact already exists: {0}")]
    Conflict(ContactKey),

    /// No contact exists for the key
    #[error("Contact not found: {0}")]
    NotFound(ContactKey),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a validation error for a missing field
    pub fn missing(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: format!("{field} must be provided"),
        }
    }

    /// Create a validation error
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(key: ContactKey) -> Self {
        Self::Conflict(key)
    }

    /// Create a "not found" error
    pub fn not_found(key: ContactKey) -> Self {
        Self::NotFound(key)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Name of the field a validation error refers to
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
