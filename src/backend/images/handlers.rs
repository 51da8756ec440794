//! Image Upload Handler
//!
//! `POST /api/upload-image` takes the raw image bytes as the request body.
//! The format is detected from the leading bytes; the image is stored at
//! `{images_root}/{unix millis}/filesent.{ext}` on the configured branch.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;

use crate::backend::error::BackendError;
use crate::backend::github::GitHubClient;
use crate::shared::files::check_content_size;
use crate::shared::image::detect_image;
use crate::shared::AppConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub success: bool,
    /// File extension of the detected format
    pub format: String,
    pub path: String,
    /// Page of the stored file on the remote host
    pub github_url: Option<String>,
    /// Direct download URL
    pub image_url: String,
}

pub async fn upload_image(
    State(github): State<GitHubClient>,
    State(config): State<Arc<AppConfig>>,
    body: Bytes,
) -> Result<(StatusCode, Json<UploadImageResponse>), BackendError> {
    check_content_size(body.len(), config.limits.max_image_bytes)?;

    let format = detect_image(&body).ok_or_else(|| {
        BackendError::handler(StatusCode::BAD_REQUEST, "Unsupported image format")
    })?;

    let timestamp = Utc::now().timestamp_millis();
    let path = format!(
        "{}/{}/filesent.{}",
        config.store.images_root.trim_matches('/'),
        timestamp,
        format.extension()
    );

    let result = github
        .put_file(&path, &body, &format!("Upload image {}", timestamp), None)
        .await
        .map_err(|e| {
            if e.status().is_some() {
                BackendError::passthrough(&e)
            } else {
                BackendError::from(e)
            }
        })?;

    tracing::info!(
        "Uploaded {} image ({} bytes) to {}",
        format.mime_type(),
        body.len(),
        path
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadImageResponse {
            success: true,
            format: format.extension().to_string(),
            github_url: result.content.and_then(|c| c.html_url),
            image_url: github.raw_url_for(&path),
            path,
        }),
    ))
}
