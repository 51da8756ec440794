//! Shared Error Types
//!
//! This module defines error types produced by the request-independent parts of
//! the crate: record decoding, file and path validation, payload size checks.
//! The backend wraps these in `BackendError` and maps them to HTTP statuses.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Input validation failures (filenames, participant ids)
//! - `PayloadTooLarge` - Content exceeding a configured size limit
//!
//! # Usage
//!
//! ```rust
//! use repostore::shared::error::SharedError;
//!
//! let error = SharedError::validation("file", "Invalid filename");
//! assert!(error.to_string().contains("file"));
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Input validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Payload larger than the configured limit
    #[error("Payload too large: {actual} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge {
        /// Configured maximum in bytes
        limit: usize,
        /// Size of the rejected payload in bytes
        actual: usize,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new payload size error
    pub fn too_large(limit: usize, actual: usize) -> Self {
        Self::PayloadTooLarge { limit, actual }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error() {
        let error = SharedError::serialization("Invalid JSON");
        match error {
            SharedError::SerializationError { message } => {
                assert_eq!(message, "Invalid JSON");
            }
            _ => panic!("Expected SerializationError"),
        }
    }

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("file", "Invalid filename");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "file");
                assert_eq!(message, "Invalid filename");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_too_large_display() {
        let error = SharedError::too_large(10, 42);
        let display = error.to_string();
        assert!(display.contains("42 bytes"));
        assert!(display.contains("10 byte limit"));
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        match shared_error {
            SharedError::SerializationError { message } => {
                assert!(message.starts_with("JSON error"));
            }
            _ => panic!("Expected SerializationError from serde error"),
        }
    }
}
