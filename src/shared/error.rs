//! Shared Error Types
//!
//! This module defines the error types produced while interpreting player
//! input. They carry no HTTP knowledge; the backend maps them to status codes.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or outside its bounds
//! - `MalformedBody` - The request body could not be decoded at all
//!
//! # Usage
//!
//! ```rust
//! use triviaboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("phone", "must not be empty");
//! assert_eq!(error.to_string(), "invalid phone: must not be empty");
//! ```
use thiserror::Error;

/// Errors raised while validating player input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// A single field failed validation
    #[error("invalid {field}: {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The body was not valid JSON or did not match the expected shape
    #[error("malformed request body: {message}")]
    MalformedBody {
        /// Decoder message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::MalformedBody { .. } => None,
        }
    }
}
