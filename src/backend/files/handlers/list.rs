/**
 * List Handler
 *
 * `GET /api/list` returns the entries at the root of the data repository.
 * Only a fixed set of fields is exposed; download URLs and content are not.
 */

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::github::{ContentEntry, GitHubClient, GitHubError};

/// Public view of one repository entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub path: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub sha: String,
    pub url: Option<String>,
}

impl From<ContentEntry> for FileSummary {
    fn from(entry: ContentEntry) -> Self {
        Self {
            name: entry.name,
            path: entry.path,
            size: entry.size,
            kind: entry.kind,
            sha: entry.sha,
            url: entry.html_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListFilesResponse {
    pub success: bool,
    pub count: usize,
    pub files: Vec<FileSummary>,
}

/// List the repository root
pub async fn list_files(
    State(github): State<GitHubClient>,
) -> Result<Json<ListFilesResponse>, BackendError> {
    let entries = github.list_dir("").await.map_err(|e| {
        if let GitHubError::Api { status, body, .. } = &e {
            tracing::error!("GitHub API error: {} {}", status, body);
        }
        match e.status() {
            Some(404) => BackendError::handler(StatusCode::NOT_FOUND, "Repository not found"),
            Some(403) => BackendError::handler(
                StatusCode::FORBIDDEN,
                "Access forbidden. Check token permissions.",
            ),
            Some(status) => BackendError::handler(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to fetch files from GitHub",
            ),
            None => BackendError::from(e),
        }
    })?;

    let files: Vec<FileSummary> = entries.into_iter().map(FileSummary::from).collect();
    Ok(Json(ListFilesResponse {
        success: true,
        count: files.len(),
        files,
    }))
}
