//! Common test utilities and helpers
//!
//! - A mock of the remote contents API (wiremock)
//! - Configuration pointing the application at that mock
//! - Builders for the JSON shapes the remote returns
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;

use axum_test::TestServer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Value};
use wiremock::MockServer;

use repostore::backend::server::create_app;
use repostore::shared::{AppConfig, AppConfigBuilder};

pub const OWNER: &str = "lirilabs";
pub const REPO: &str = "liri-database-v1-2025";
pub const TOKEN: &str = "test-token";

/// Builder already pointed at `mock` with a token set
pub fn config_builder(mock: &MockServer) -> AppConfigBuilder {
    AppConfig::builder().token(TOKEN).api_url(mock.uri())
}

pub fn test_config(mock: &MockServer) -> AppConfig {
    config_builder(mock)
        .build()
        .expect("Failed to build test configuration")
}

/// Start the application against the given configuration
pub async fn create_test_server(config: AppConfig) -> TestServer {
    let app = create_app(config)
        .await
        .expect("Failed to create application");
    TestServer::new(app).expect("Failed to start test server")
}

/// URL path of a file under the data repository's contents endpoint
pub fn contents_path(path: &str) -> String {
    format!("/repos/{}/{}/contents/{}", OWNER, REPO, path)
}

/// Base64 wrapped at 60 columns, as the remote serves it
pub fn wrapped_base64(bytes: &[u8]) -> String {
    let encoded = BASE64.encode(bytes);
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / 60 + 1);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % 60 == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped.push('\n');
    wrapped
}

/// Single-file contents response
pub fn file_response(path: &str, sha: &str, bytes: &[u8]) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    json!({
        "name": name,
        "path": path,
        "sha": sha,
        "size": bytes.len(),
        "type": "file",
        "html_url": format!("https://github.com/{}/{}/blob/main/{}", OWNER, REPO, path),
        "download_url": null,
        "content": wrapped_base64(bytes),
        "encoding": "base64",
    })
}

/// One entry of a directory listing
pub fn listing_entry(path: &str, kind: &str) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    json!({
        "name": name,
        "path": path,
        "sha": format!("sha-{}", name),
        "size": 12,
        "type": kind,
        "html_url": format!("https://github.com/{}/{}/blob/main/{}", OWNER, REPO, path),
        "download_url": null,
    })
}

/// Response of a successful create/update
pub fn write_response(path: &str, sha: &str) -> Value {
    json!({
        "content": {
            "name": path.rsplit('/').next().unwrap_or(path),
            "path": path,
            "sha": sha,
            "size": 1,
            "type": "file",
            "html_url": format!("https://github.com/{}/{}/blob/main/{}", OWNER, REPO, path),
            "download_url": null,
        },
        "commit": {
            "sha": "commit-sha",
            "html_url": "https://github.com/commit/commit-sha",
        }
    })
}
