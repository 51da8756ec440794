//! Wire types of the remote contents API.
//!
//! Only the fields this crate reads are modelled; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// One entry of a contents listing, or a single file with its content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub size: u64,
    /// `file`, `dir`, `symlink` or `submodule`
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    /// Base64 with embedded newlines; only present for single-file reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }

    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

/// A path resolves either to one file or to a directory listing
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentsResponse {
    Directory(Vec<ContentEntry>),
    File(ContentEntry),
}

/// A decoded file together with the hash needed to update or delete it
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteFile {
    pub path: String,
    pub sha: String,
    pub bytes: Vec<u8>,
    pub html_url: Option<String>,
}

/// Commit created by a write or delete
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommitInfo {
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Result of creating or updating a file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WriteResult {
    #[serde(default)]
    pub content: Option<ContentEntry>,
    #[serde(default)]
    pub commit: CommitInfo,
}

/// Result of deleting a file
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DeleteResult {
    #[serde(default)]
    pub commit: CommitInfo,
}

/// Body of a create/update request
#[derive(Debug, Serialize)]
pub(crate) struct PutFileRequest<'a> {
    pub message: &'a str,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
    pub branch: &'a str,
}

/// Body of a delete request
#[derive(Debug, Serialize)]
pub(crate) struct DeleteFileRequest<'a> {
    pub message: &'a str,
    pub sha: &'a str,
    pub branch: &'a str,
}
