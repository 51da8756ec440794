/**
 * Delete Handler
 *
 * `POST /api/delete` with `{ "file": "<name>", "confirm": true }` removes a
 * single file at the repository root.
 *
 * # Checks, in order
 *
 * 1. `Authorization` header present, when `server.require_auth` is set (401)
 * 2. `confirm` is `true` or `"true"` (400)
 * 3. `file` present and a plain file name (400)
 * 4. `file` not on the protected list (403)
 * 5. The file exists (404); its current hash is then used for the delete,
 *    so a concurrent modification is reported as 409
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::github::{GitHubClient, GitHubError};
use crate::shared::files::{is_protected_file, validate_filename};
use crate::shared::AppConfig;

#[derive(Debug, Deserialize)]
pub struct DeleteFileRequest {
    #[serde(default)]
    pub file: Option<String>,
    /// `true` or `"true"`
    #[serde(default)]
    pub confirm: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DeletedCommit {
    pub sha: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteFileResponse {
    pub success: bool,
    pub message: String,
    pub commit: DeletedCommit,
}

fn is_confirmed(confirm: Option<&Value>) -> bool {
    match confirm {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

pub async fn delete_file(
    State(github): State<GitHubClient>,
    State(config): State<Arc<AppConfig>>,
    headers: HeaderMap,
    payload: Result<Json<DeleteFileRequest>, JsonRejection>,
) -> Result<Json<DeleteFileResponse>, BackendError> {
    if config.server.require_auth && !headers.contains_key(AUTHORIZATION) {
        return Err(BackendError::handler(
            StatusCode::UNAUTHORIZED,
            "Authentication required for delete operations",
        ));
    }

    let Json(request) = payload?;

    if !is_confirmed(request.confirm.as_ref()) {
        return Err(BackendError::handler(
            StatusCode::BAD_REQUEST,
            "Delete operation requires explicit confirmation. Set confirm: true",
        ));
    }

    let file = request
        .file
        .filter(|f| !f.is_empty())
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing required field: file"))?;
    validate_filename("file", &file)?;

    if is_protected_file(&file) {
        tracing::warn!("Refused to delete protected file {}", file);
        return Err(BackendError::handler(
            StatusCode::FORBIDDEN,
            format!("Cannot delete protected file: {}", file),
        ));
    }

    let existing = match github.get_file(&file).await {
        Ok(Some(existing)) => existing,
        Ok(None) => return Err(BackendError::handler(StatusCode::NOT_FOUND, "File not found")),
        Err(e @ GitHubError::Api { .. }) => {
            tracing::error!("Error fetching file info: {}", e);
            let status = e
                .status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            return Err(
                BackendError::handler(status, "Failed to retrieve file information")
                    .with_details(e.body_json().unwrap_or(Value::Null)),
            );
        }
        Err(e) => return Err(e.into()),
    };

    let message = format!("Delete {} via API - {}", file, Utc::now().to_rfc3339());
    let commit = github
        .delete_file(&file, &existing.sha, &message)
        .await
        .map_err(|e| match e.status() {
            Some(409) => BackendError::handler(
                StatusCode::CONFLICT,
                "Conflict: File was modified. Please refresh and try again.",
            ),
            Some(status) => {
                tracing::error!("GitHub delete error: {}", e);
                BackendError::handler(
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    "Failed to delete file from GitHub",
                )
                .with_details(e.body_json().unwrap_or(Value::Null))
            }
            None => BackendError::from(e),
        })?;

    tracing::info!("Deleted {} (commit {:?})", file, commit.sha);
    Ok(Json(DeleteFileResponse {
        success: true,
        message: format!("File {} deleted successfully", file),
        commit: DeletedCommit {
            sha: commit.sha,
            url: commit.html_url,
        },
    }))
}
