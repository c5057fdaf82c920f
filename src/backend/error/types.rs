/**
 * Backend Error Types
 *
 * The error taxonomy of the request handlers. Every variant maps to exactly
 * one HTTP status; nothing is retried or silently recovered.
 *
 * | Variant      | Status | Raised when                                  |
 * |--------------|--------|----------------------------------------------|
 * | `Validation` | 400    | missing/invalid input or undecodable body    |
 * | `NotFound`   | 404    | result recorded for a phone that never logged in |
 * | `Conflict`   | 403    | result already recorded for this phone       |
 * | `Storage`    | 500    | the store failed                             |
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use triviaboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("You have already played");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// The referenced record does not exist
    #[error("{message}")]
    NotFound {
        message: String,
    },

    /// The operation would break the one-result-per-player rule
    #[error("{message}")]
    Conflict {
        message: String,
    },

    /// The underlying store failed
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl BackendError {
    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::FORBIDDEN,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Storage errors are passed through verbatim.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let validation: BackendError = SharedError::validation("phone", "is required").into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(
            BackendError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::conflict("played").status_code(),
            StatusCode::FORBIDDEN
        );

        let storage: BackendError = StoreError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_is_transparent() {
        let error: BackendError = SharedError::validation("phone", "is required").into();
        assert_eq!(error.message(), "invalid phone: is required");
    }

    #[test]
    fn test_storage_message_is_verbatim() {
        let error: BackendError = StoreError::Database(sqlx::Error::PoolClosed).into();
        assert!(error.message().starts_with("database error:"));
    }

    #[test]
    fn test_not_found_message() {
        let error = BackendError::not_found("Please log in first");
        match &error {
            BackendError::NotFound { message } => assert_eq!(message, "Please log in first"),
            _ => panic!("Expected NotFound"),
        }
        assert_eq!(error.message(), "Please log in first");
    }
}
