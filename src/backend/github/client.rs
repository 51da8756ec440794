/**
 * Contents API Client
 *
 * Typed access to the remote repository's `contents` endpoints. Reads are
 * pinned to the configured branch with `ref`; writes and deletes name the
 * branch in their body and, for existing files, carry the content hash read
 * beforehand. The remote rejects a write whose hash is no longer current,
 * which is what makes every mutation optimistic.
 */

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::error::GitHubError;
use super::types::{
    CommitInfo, ContentEntry, ContentsResponse, DeleteFileRequest, DeleteResult, PutFileRequest,
    RemoteFile, WriteResult,
};
use crate::shared::config::GitHubConfig;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Client for one repository on the remote host
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    raw_url: String,
    owner: String,
    repo: String,
    branch: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client from configuration.
    pub fn new(config: &GitHubConfig) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
        let agent = HeaderValue::from_str(&config.user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("repostore"));
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::http("client_init", e))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            raw_url: config.raw_url.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            token: config.token.clone(),
        })
    }

    /// Same credentials and owner, different repository
    pub fn for_repo(&self, repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            ..self.clone()
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Public raw download URL of a path on the configured branch
    pub fn raw_url_for(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_url, self.owner, self.repo, self.branch, path
        )
    }

    fn contents_url(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            format!("{}/repos/{}/{}/contents", self.api_url, self.owner, self.repo)
        } else {
            format!(
                "{}/repos/{}/{}/contents/{}",
                self.api_url, self.owner, self.repo, path
            )
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, GitHubError> {
        let token = self.token.as_deref().ok_or(GitHubError::MissingToken)?;
        Ok(builder.header(AUTHORIZATION, format!("Bearer {}", token)))
    }

    async fn send(&self, endpoint: &str, builder: RequestBuilder) -> Result<Response, GitHubError> {
        tracing::debug!("GitHub request: {}", endpoint);
        self.authorized(builder)?
            .send()
            .await
            .map_err(|e| GitHubError::http(endpoint, e))
    }

    async fn ensure_success(endpoint: &str, resp: Response) -> Result<Response, GitHubError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(GitHubError::Api {
            endpoint: endpoint.to_string(),
            status,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T, GitHubError> {
        resp.json()
            .await
            .map_err(|e| GitHubError::deserialization(endpoint, e))
    }

    /// Fetch whatever lives at `path`: `None` on 404.
    pub async fn get_contents(&self, path: &str) -> Result<Option<ContentsResponse>, GitHubError> {
        let endpoint = format!("GET contents/{}", path);
        let request = self
            .http
            .get(self.contents_url(path))
            .query(&[("ref", self.branch.as_str())]);

        let resp = self.send(&endpoint, request).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::ensure_success(&endpoint, resp).await?;
        Self::decode(&endpoint, resp).await.map(Some)
    }

    /// Fetch and decode a single file: `None` on 404.
    pub async fn get_file(&self, path: &str) -> Result<Option<RemoteFile>, GitHubError> {
        match self.get_contents(path).await? {
            None => Ok(None),
            Some(ContentsResponse::Directory(_)) => Err(GitHubError::NotAFile {
                path: path.to_string(),
            }),
            Some(ContentsResponse::File(entry)) if !entry.is_file() => {
                Err(GitHubError::NotAFile { path: entry.path })
            }
            Some(ContentsResponse::File(entry)) if has_inline_content(&entry) => {
                decode_entry(entry).map(Some)
            }
            Some(ContentsResponse::File(entry)) => self.download_entry(entry).await.map(Some),
        }
    }

    /// Files over 1 MB come back without inline content; fetch the raw body instead.
    async fn download_entry(&self, entry: ContentEntry) -> Result<RemoteFile, GitHubError> {
        let url = entry.download_url.as_deref().ok_or_else(|| GitHubError::Decode {
            path: entry.path.clone(),
            message: format!(
                "content not included (encoding {}) and no download_url",
                entry.encoding.as_deref().unwrap_or("unknown")
            ),
        })?;
        tracing::debug!("Downloading {} ({} bytes) from {}", entry.path, entry.size, url);
        let bytes = self.download_bytes(url).await?;

        Ok(RemoteFile {
            path: entry.path,
            sha: entry.sha,
            bytes,
            html_url: entry.html_url,
        })
    }

    /// List a directory; an empty path lists the repository root.
    pub async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>, GitHubError> {
        let endpoint = format!("GET contents/{}", path);
        match self.get_contents(path).await? {
            Some(ContentsResponse::Directory(entries)) => Ok(entries),
            Some(ContentsResponse::File(_)) => Err(GitHubError::deserialization(
                endpoint,
                "expected a directory listing",
            )),
            None => Err(GitHubError::Api {
                endpoint,
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }

    /// Create (`sha` = `None`) or update (`sha` = current hash) a file.
    pub async fn put_file(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
        sha: Option<&str>,
    ) -> Result<WriteResult, GitHubError> {
        let endpoint = format!("PUT contents/{}", path);
        let body = PutFileRequest {
            message,
            content: BASE64.encode(content),
            sha,
            branch: &self.branch,
        };
        let request = self.http.put(self.contents_url(path)).json(&body);

        let resp = self.send(&endpoint, request).await?;
        let resp = Self::ensure_success(&endpoint, resp).await?;
        Self::decode(&endpoint, resp).await
    }

    /// Delete a file at its current hash.
    pub async fn delete_file(
        &self,
        path: &str,
        sha: &str,
        message: &str,
    ) -> Result<CommitInfo, GitHubError> {
        let endpoint = format!("DELETE contents/{}", path);
        let body = DeleteFileRequest {
            message,
            sha,
            branch: &self.branch,
        };
        let request = self.http.delete(self.contents_url(path)).json(&body);

        let resp = self.send(&endpoint, request).await?;
        let resp = Self::ensure_success(&endpoint, resp).await?;
        let result: DeleteResult = Self::decode(&endpoint, resp).await?;
        Ok(result.commit)
    }

    /// Repository metadata, passed through untouched
    pub async fn repository(&self) -> Result<serde_json::Value, GitHubError> {
        let endpoint = format!("GET repos/{}/{}", self.owner, self.repo);
        let url = format!("{}/repos/{}/{}", self.api_url, self.owner, self.repo);

        let resp = self.send(&endpoint, self.http.get(url)).await?;
        let resp = Self::ensure_success(&endpoint, resp).await?;
        Self::decode(&endpoint, resp).await
    }

    /// Download a file body from its `download_url`
    pub async fn download(&self, url: &str) -> Result<String, GitHubError> {
        let endpoint = format!("GET {}", url);
        let resp = self.send(&endpoint, self.http.get(url)).await?;
        let resp = Self::ensure_success(&endpoint, resp).await?;
        resp.text()
            .await
            .map_err(|e| GitHubError::deserialization(endpoint, e))
    }

    /// Download a file body without assuming it is text
    pub async fn download_bytes(&self, url: &str) -> Result<Vec<u8>, GitHubError> {
        let endpoint = format!("GET {}", url);
        let resp = self.send(&endpoint, self.http.get(url)).await?;
        let resp = Self::ensure_success(&endpoint, resp).await?;
        resp.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| GitHubError::deserialization(endpoint, e))
    }
}

/// Whether a single-file response carries its body as base64.
///
/// Empty files come back as `content: ""` with `encoding: "base64"`; large
/// files as `content: ""` with `encoding: "none"`.
fn has_inline_content(entry: &ContentEntry) -> bool {
    matches!(entry.encoding.as_deref(), None | Some("base64"))
}

/// Decode the base64 body of a single-file response.
fn decode_entry(entry: ContentEntry) -> Result<RemoteFile, GitHubError> {
    let encoded = entry.content.as_deref().unwrap_or_default();
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = BASE64.decode(compact).map_err(|e| GitHubError::Decode {
        path: entry.path.clone(),
        message: e.to_string(),
    })?;

    Ok(RemoteFile {
        path: entry.path,
        sha: entry.sha,
        bytes,
        html_url: entry.html_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(content: &str) -> ContentEntry {
        ContentEntry {
            name: "a.json".into(),
            path: "dir/a.json".into(),
            sha: "sha1".into(),
            size: 0,
            kind: "file".into(),
            html_url: None,
            download_url: None,
            content: Some(content.into()),
            encoding: Some("base64".into()),
        }
    }

    fn client() -> GitHubClient {
        let config = GitHubConfig {
            api_url: "http://api.local/".into(),
            raw_url: "http://raw.local".into(),
            token: Some("t".into()),
            ..GitHubConfig::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn decodes_wrapped_base64() {
        // The remote wraps base64 at 60 columns.
        let file = decode_entry(entry("eyJkYXRl\nIjoiMjAy\nNSJ9\n")).unwrap();
        assert_eq!(file.bytes, br#"{"date":"2025"}"#);
        assert_eq!(file.sha, "sha1");
    }

    #[test]
    fn rejects_invalid_base64() {
        match decode_entry(entry("!!!")) {
            Err(GitHubError::Decode { path, .. }) => assert_eq!(path, "dir/a.json"),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_decodes_to_no_bytes() {
        let mut e = entry("");
        e.content = None;
        assert!(decode_entry(e).unwrap().bytes.is_empty());
    }

    #[test]
    fn large_files_are_not_inline() {
        assert!(has_inline_content(&entry("")));
        let mut large = entry("");
        large.encoding = Some("none".into());
        assert!(!has_inline_content(&large));
        large.encoding = None;
        assert!(has_inline_content(&large));
    }

    #[test]
    fn urls() {
        let c = client();
        assert_eq!(
            c.contents_url(""),
            "http://api.local/repos/lirilabs/liri-database-v1-2025/contents"
        );
        assert_eq!(
            c.contents_url("messages/a_b/2025-01-01.json"),
            "http://api.local/repos/lirilabs/liri-database-v1-2025/contents/messages/a_b/2025-01-01.json"
        );
        assert_eq!(
            c.raw_url_for("fall/1/filesent.png"),
            "http://raw.local/lirilabs/liri-database-v1-2025/main/fall/1/filesent.png"
        );
        assert_eq!(c.for_repo("app").repo(), "app");
    }

    #[test]
    fn missing_token_fails_before_sending() {
        let config = GitHubConfig::default();
        let c = GitHubClient::new(&config).unwrap();
        let result = c.authorized(c.http.get("http://api.local"));
        assert!(matches!(result, Err(GitHubError::MissingToken)));
    }
}
