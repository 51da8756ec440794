/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * In development mode a `details` field carries the remote's response or the
 * underlying error text. Pass-through errors return the remote body instead.
 *
 * Extractor rejections (malformed JSON bodies, bad query strings) are
 * converted too, so clients always receive the JSON error shape.
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

/// Set once at startup from `server.development`
static DEVELOPMENT: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

/// Enable `details` in error responses. Only the first call has an effect.
pub fn set_development_mode(enabled: bool) {
    let _ = DEVELOPMENT.set(enabled);
}

fn development_mode() -> bool {
    DEVELOPMENT.get().copied().unwrap_or(false)
}

impl BackendError {
    /// JSON body of the error response
    pub fn to_body(&self, include_details: bool) -> serde_json::Value {
        if let BackendError::Passthrough { body, .. } = self {
            return body.clone();
        }

        let status = self.status_code();
        let mut body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });
        if include_details {
            if let Some(details) = self.details() {
                body["details"] = details;
            }
        }
        body
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::handler(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        BackendError::handler(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR || status == StatusCode::BAD_GATEWAY {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        (status, Json(self.to_body(development_mode()))).into_response()
    }
}
