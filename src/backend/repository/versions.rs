//! Versioned Content Reader
//!
//! An application repository publishes content in top-level folders named
//! `v1`, `v2`, ... This module finds those folders, reads each one
//! recursively and inlines the parsed body of every `.json` file.

use futures_util::future::{BoxFuture, FutureExt};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{json, Value};

use crate::backend::github::{ContentEntry, GitHubClient, GitHubError};

/// One node of a recursively read folder
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum TreeNode {
    #[serde(rename = "directory")]
    Directory {
        name: String,
        path: String,
        children: Vec<TreeNode>,
    },
    #[serde(rename = "file")]
    File {
        name: String,
        path: String,
        download_url: Option<String>,
        #[serde(rename = "jsonContent", skip_serializing_if = "Option::is_none")]
        json_content: Option<Value>,
    },
}

/// A `v<N>` folder at the repository root
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VersionFolder {
    pub name: String,
    pub number: u64,
    pub path: String,
    /// Only filled for the latest version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<TreeNode>>,
}

/// Response of the versions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct VersionsResponse {
    pub total: usize,
    /// Newest first
    pub versions: Vec<VersionFolder>,
    pub latest: Option<VersionFolder>,
    /// Folder name to its contents, newest first
    pub content: VersionContent,
}

/// Version folders and their trees, serialized as a JSON object whose keys
/// keep insertion order (`v10` before `v2`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionContent(Vec<(String, Vec<TreeNode>)>);

impl VersionContent {
    pub fn insert(&mut self, name: String, tree: Vec<TreeNode>) {
        self.0.push((name, tree));
    }

    pub fn get(&self, name: &str) -> Option<&Vec<TreeNode>> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, tree)| tree)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for VersionContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, tree) in &self.0 {
            map.serialize_entry(name, tree)?;
        }
        map.end()
    }
}

/// `v12` and `V12` give 12; anything else gives `None`.
pub fn parse_version_number(name: &str) -> Option<u64> {
    let digits = name.strip_prefix(['v', 'V'])?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Version folders among `entries`, newest first
pub fn version_folders(entries: &[ContentEntry]) -> Vec<VersionFolder> {
    let mut folders: Vec<VersionFolder> = entries
        .iter()
        .filter(|e| e.is_dir())
        .filter_map(|e| {
            parse_version_number(&e.name).map(|number| VersionFolder {
                name: e.name.clone(),
                number,
                path: e.path.clone(),
                files: None,
            })
        })
        .collect();
    folders.sort_by(|a, b| b.number.cmp(&a.number));
    folders
}

/// Parse a downloaded JSON body, keeping the raw text when it does not parse
pub fn parse_json_body(text: String) -> Value {
    match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => json!({ "invalidJson": true, "raw": text }),
    }
}

/// Reads versioned content from one repository
#[derive(Debug, Clone)]
pub struct VersionReader {
    client: GitHubClient,
}

impl VersionReader {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }

    /// Read every version folder and return them newest first
    pub async fn read_all(&self) -> Result<VersionsResponse, GitHubError> {
        let root = self.client.list_dir("").await?;
        let versions = version_folders(&root);

        let mut content = VersionContent::default();
        for version in &versions {
            let tree = self.read_folder(version.path.clone()).await?;
            content.insert(version.name.clone(), tree);
        }

        let latest = versions.first().cloned().map(|mut latest| {
            latest.files = content.get(&latest.name).cloned();
            latest
        });

        Ok(VersionsResponse {
            total: versions.len(),
            versions,
            latest,
            content,
        })
    }

    fn read_folder(&self, path: String) -> BoxFuture<'_, Result<Vec<TreeNode>, GitHubError>> {
        async move {
            let entries = self.client.list_dir(&path).await?;
            let mut nodes = Vec::with_capacity(entries.len());

            for entry in entries {
                if entry.is_dir() {
                    let children = self.read_folder(entry.path.clone()).await?;
                    nodes.push(TreeNode::Directory {
                        name: entry.name,
                        path: entry.path,
                        children,
                    });
                    continue;
                }

                let json_content = match (&entry.download_url, entry.name.ends_with(".json")) {
                    (Some(url), true) => Some(self.fetch_json(url).await),
                    _ => None,
                };
                nodes.push(TreeNode::File {
                    name: entry.name,
                    path: entry.path,
                    download_url: entry.download_url,
                    json_content,
                });
            }
            Ok(nodes)
        }
        .boxed()
    }

    /// A failed download is reported inline rather than failing the whole tree.
    async fn fetch_json(&self, url: &str) -> Value {
        match self.client.download(url).await {
            Ok(text) => parse_json_body(text),
            Err(e) => {
                tracing::warn!("Failed to download {}: {}", url, e);
                json!({ "error": "Failed to download JSON", "details": e.to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(name: &str) -> ContentEntry {
        ContentEntry {
            name: name.into(),
            path: name.into(),
            sha: "s".into(),
            size: 0,
            kind: "dir".into(),
            html_url: None,
            download_url: None,
            content: None,
            encoding: None,
        }
    }

    #[test]
    fn version_numbers() {
        assert_eq!(parse_version_number("v1"), Some(1));
        assert_eq!(parse_version_number("V12"), Some(12));
        assert_eq!(parse_version_number("v"), None);
        assert_eq!(parse_version_number("v1.2"), None);
        assert_eq!(parse_version_number("version1"), None);
        assert_eq!(parse_version_number("1"), None);
    }

    #[test]
    fn folders_sorted_newest_first() {
        let mut readme = dir("README.md");
        readme.kind = "file".into();
        let entries = vec![dir("v2"), dir("docs"), dir("v10"), dir("V1"), readme];
        let names: Vec<_> = version_folders(&entries)
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["v10", "v2", "V1"]);
    }

    #[test]
    fn file_name_like_version_is_ignored() {
        let mut file = dir("v3");
        file.kind = "file".into();
        assert!(version_folders(&[file]).is_empty());
    }

    #[test]
    fn invalid_json_keeps_raw_text() {
        assert_eq!(parse_json_body(r#"{"a":1}"#.into()), json!({ "a": 1 }));
        assert_eq!(
            parse_json_body("nope".into()),
            json!({ "invalidJson": true, "raw": "nope" })
        );
    }

    #[test]
    fn content_keeps_newest_first_order() {
        let mut content = VersionContent::default();
        for name in ["v10", "v2", "v1"] {
            content.insert(name.to_string(), vec![]);
        }
        assert_eq!(content.names().collect::<Vec<_>>(), vec!["v10", "v2", "v1"]);
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"{"v10":[],"v2":[],"v1":[]}"#
        );
        assert_eq!(content.get("v2"), Some(&vec![]));
        assert!(content.get("v3").is_none());
    }

    #[test]
    fn tree_node_serialization() {
        let node = TreeNode::File {
            name: "a.json".into(),
            path: "v1/a.json".into(),
            download_url: Some("https://raw/a.json".into()),
            json_content: Some(json!([1])),
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "file");
        assert_eq!(value["jsonContent"], json!([1]));

        let node = TreeNode::Directory {
            name: "img".into(),
            path: "v1/img".into(),
            children: vec![],
        };
        assert_eq!(serde_json::to_value(&node).unwrap()["type"], "directory");
    }
}
