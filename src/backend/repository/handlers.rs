//! Repository Handlers
//!
//! - `GET /api/repo` returns the data repository's metadata unchanged
//! - `GET /api/versions` returns the versioned content tree of the
//!   application repository (`github.versions_repo`)

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::github::GitHubError;
use crate::backend::repository::versions::{VersionReader, VersionsResponse};
use crate::backend::server::state::AppState;

/// Repository metadata pass-through
pub async fn get_repository(State(state): State<AppState>) -> Result<Json<Value>, BackendError> {
    match state.github.repository().await {
        Ok(repo) => Ok(Json(repo)),
        Err(GitHubError::Api { status, body, .. }) => Err(BackendError::handler(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            body,
        )),
        Err(e) => Err(e.into()),
    }
}

/// Versioned content of the application repository
pub async fn list_versions(
    State(state): State<AppState>,
) -> Result<Json<VersionsResponse>, BackendError> {
    let client = state.github.for_repo(state.config.github.versions_repo.clone());
    let response = VersionReader::new(client).read_all().await?;

    tracing::debug!("Read {} version folder(s)", response.total);
    Ok(Json(response))
}
