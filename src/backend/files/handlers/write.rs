/**
 * Write Handler
 *
 * `POST /api/write` with `{ "file": "<path>", "content": "<text>" }` creates
 * the file, or replaces it when it already exists. The current content hash
 * is read first and sent with the update, so a write racing another one is
 * rejected with 409 instead of clobbering it.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::github::{GitHubClient, WriteResult};
use crate::shared::files::{check_content_size, validate_path};
use crate::shared::AppConfig;

#[derive(Debug, Deserialize)]
pub struct WriteFileRequest {
    pub file: String,
    pub content: String,
}

pub async fn write_file(
    State(github): State<GitHubClient>,
    State(config): State<Arc<AppConfig>>,
    payload: Result<Json<WriteFileRequest>, JsonRejection>,
) -> Result<Json<WriteResult>, BackendError> {
    let Json(request) = payload?;
    validate_path("file", &request.file)?;
    check_content_size(request.content.len(), config.limits.max_content_bytes)?;

    let sha = github.get_file(&request.file).await?.map(|f| f.sha);
    let created = sha.is_none();

    let result = github
        .put_file(
            &request.file,
            request.content.as_bytes(),
            "update via API",
            sha.as_deref(),
        )
        .await
        .map_err(|e| {
            if e.is_stale_sha(sha.is_some()) {
                BackendError::handler(
                    StatusCode::CONFLICT,
                    "Conflict: File was modified. Please refresh and try again.",
                )
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!(
        "{} {} ({} bytes)",
        if created { "Created" } else { "Updated" },
        request.file,
        request.content.len()
    );
    Ok(Json(result))
}
