/**
 * Read Handler
 *
 * `GET /api/read?file=<path>` returns a file's content decoded as UTF-8.
 * Bytes that are not valid UTF-8 are replaced with U+FFFD.
 */

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::github::GitHubClient;
use crate::shared::files::validate_path;

#[derive(Debug, Deserialize)]
pub struct ReadFileQuery {
    pub file: String,
}

#[derive(Debug, Serialize)]
pub struct ReadFileResponse {
    pub file: String,
    pub content: String,
}

pub async fn read_file(
    State(github): State<GitHubClient>,
    query: Result<Query<ReadFileQuery>, QueryRejection>,
) -> Result<Json<ReadFileResponse>, BackendError> {
    let Query(ReadFileQuery { file }) = query?;
    validate_path("file", &file)?;

    let remote = github
        .get_file(&file)
        .await?
        .ok_or_else(|| BackendError::handler(StatusCode::NOT_FOUND, "File not found"))?;

    Ok(Json(ReadFileResponse {
        content: String::from_utf8_lossy(&remote.bytes).into_owned(),
        file,
    }))
}
