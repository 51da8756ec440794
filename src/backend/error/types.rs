/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Raised directly by handlers with an explicit status:
 * - Missing confirmation or authentication on delete
 * - Protected files, unsupported image formats
 * - Retries exhausted on a conflicting append
 *
 * ## Remote Errors
 *
 * Failures of the remote contents API. The remote status is kept when the
 * remote answered, otherwise the request is reported as a bad gateway.
 *
 * ## Shared Errors
 *
 * Validation and size failures from the `shared` module.
 */

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::backend::github::GitHubError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use repostore::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::FORBIDDEN, "Cannot delete protected file: README.md");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
        /// Extra context, only rendered in development mode
        details: Option<Value>,
    },

    /// Remote error whose status and body are returned to the client unchanged
    #[error("Remote error: {status}")]
    Passthrough {
        status: StatusCode,
        body: Value,
    },

    /// Remote contents API failure
    #[error(transparent)]
    Remote(#[from] GitHubError),

    /// Shared error (validation, payload size)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Return the remote's status and body as they are
    pub fn passthrough(err: &GitHubError) -> Self {
        let status = err
            .status()
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let body = err
            .body_json()
            .unwrap_or_else(|| serde_json::json!({ "error": err.to_string() }));
        Self::Passthrough { status, body }
    }

    /// Attach details to a handler error; other variants are returned unchanged
    pub fn with_details(self, extra: Value) -> Self {
        match self {
            Self::HandlerError {
                status, message, ..
            } => Self::HandlerError {
                status,
                message,
                details: Some(extra),
            },
            other => other,
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Passthrough` - The remote's status
    /// - `Remote` - 500 for a missing token, the remote status when it answered, else 502
    /// - `SharedError` - 400 for validation, 413 for size, 500 for serialization
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Passthrough { status, .. } => *status,
            Self::Remote(err) => match err {
                GitHubError::MissingToken => StatusCode::INTERNAL_SERVER_ERROR,
                GitHubError::NotAFile { .. } => StatusCode::BAD_REQUEST,
                GitHubError::Api { status, .. } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                }
                GitHubError::Http { .. }
                | GitHubError::Deserialization { .. }
                | GitHubError::Decode { .. } => StatusCode::BAD_GATEWAY,
            },
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Remote failures never echo the remote body here; it may contain
    /// repository internals.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Passthrough { status, .. } => status.to_string(),
            Self::Remote(err) => match err {
                GitHubError::MissingToken => "Server configuration error".to_string(),
                GitHubError::NotAFile { path } => format!("{} is a directory", path),
                GitHubError::Api { status: 404, .. } => "Not found".to_string(),
                GitHubError::Api { .. } => "GitHub request failed".to_string(),
                GitHubError::Http { .. } => "Failed to reach GitHub".to_string(),
                GitHubError::Deserialization { .. } | GitHubError::Decode { .. } => {
                    "Unexpected response from GitHub".to_string()
                }
            },
            Self::SharedError(err) => match err {
                SharedError::ValidationError { message, .. } => message.clone(),
                other => other.to_string(),
            },
            Self::SerializationError(err) => err.to_string(),
        }
    }

    /// Details to render in development mode
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::HandlerError { details, .. } => details.clone(),
            Self::Remote(err) => err
                .body_json()
                .or_else(|| Some(Value::String(err.to_string()))),
            _ => None,
        }
    }
}
