//! Append-Only Message Store
//!
//! Chat messages live in the remote repository as one JSON document per
//! conversation per day: `{root}/{a}_{b}/{YYYY-MM-DD}.json`, where `a` and `b`
//! are the two participant ids in sorted order.
//!
//! # Appending
//!
//! 1. Read today's document, remembering its content hash.
//! 2. Absent: create it with the new item as its only entry (no hash).
//!    Present: decode, push the item, re-encode.
//! 3. Write back conditioned on the hash from step 1. If another writer got
//!    there first the remote rejects the write; start again from step 1,
//!    at most `max_attempts` times in total.
//! 4. Read the document again and return the merged item list.
//!
//! A stored document that does not decode is reported, never overwritten.

use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::backend::error::BackendError;
use crate::backend::github::{GitHubClient, GitHubError};
use crate::shared::messaging::{
    conversation_key, daily_document_path, daily_file_name, validate_participant, ChatItem,
    DailyDocument,
};

/// Result of a successful append
#[derive(Debug, Clone, PartialEq)]
pub struct AppendOutcome {
    /// Conversation folder key
    pub folder: String,
    /// Daily document file name
    pub file: String,
    /// Full repository path of the document
    pub path: String,
    /// The day's document after the append
    pub document: DailyDocument,
    /// Writes attempted, 1 when nobody raced us
    pub attempts: u32,
}

/// Message store over one repository
#[derive(Debug, Clone)]
pub struct MessageStore {
    client: GitHubClient,
    root: String,
    max_attempts: u32,
}

impl MessageStore {
    pub fn new(client: GitHubClient, root: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            client,
            root: root.into(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Append `item` to its conversation's document for `today`.
    pub async fn append(
        &self,
        item: ChatItem,
        today: NaiveDate,
    ) -> Result<AppendOutcome, BackendError> {
        validate_participant("from", &item.from)?;
        validate_participant("to", &item.to)?;

        let folder = conversation_key(&item.from, &item.to);
        let file = daily_file_name(today);
        let path = daily_document_path(&self.root, &folder, today);
        let commit_message = format!("update {}", path);

        let mut attempts = 0;
        let written = loop {
            attempts += 1;

            let (document, sha) = match self.load(&path).await? {
                None => (DailyDocument::new(today, item.clone()), None),
                Some((mut document, sha)) => {
                    document.push(item.clone());
                    (document, Some(sha))
                }
            };
            let bytes = document.to_pretty_bytes()?;

            match self
                .client
                .put_file(&path, &bytes, &commit_message, sha.as_deref())
                .await
            {
                Ok(_) => break document,
                Err(e) if e.is_stale_sha(sha.is_some()) && attempts < self.max_attempts => {
                    tracing::warn!(
                        "Concurrent write on {} (attempt {}/{}), retrying",
                        path,
                        attempts,
                        self.max_attempts
                    );
                }
                Err(e) if e.is_stale_sha(sha.is_some()) => {
                    tracing::warn!("Giving up on {} after {} attempts", path, attempts);
                    return Err(BackendError::handler(
                        StatusCode::CONFLICT,
                        "Conflict: the conversation was modified concurrently. Please try again.",
                    )
                    .with_details(serde_json::json!({ "attempts": attempts })));
                }
                Err(e) => return Err(e.into()),
            }
        };

        // The remote may serve a cached copy right after a write; never return
        // fewer items than were just written. The item is already stored, so a
        // failed read-back must not turn into an error a client would retry.
        let document = match self.load(&path).await {
            Ok(Some((read_back, _))) if read_back.items.len() >= written.items.len() => read_back,
            Ok(_) => written,
            Err(e) => {
                tracing::warn!("Read-back of {} failed after write: {}", path, e);
                written
            }
        };

        tracing::info!(
            "Appended message to {} ({} items, {} attempt(s))",
            path,
            document.items.len(),
            attempts
        );

        Ok(AppendOutcome {
            folder,
            file,
            path,
            document,
            attempts,
        })
    }

    /// Read one conversation day without writing.
    pub async fn read_day(
        &self,
        a: &str,
        b: &str,
        date: NaiveDate,
    ) -> Result<Option<DailyDocument>, BackendError> {
        validate_participant("a", a)?;
        validate_participant("b", b)?;
        let path = daily_document_path(&self.root, &conversation_key(a, b), date);
        Ok(self.load(&path).await?.map(|(document, _)| document))
    }

    /// Fetch and decode a daily document with its content hash.
    async fn load(&self, path: &str) -> Result<Option<(DailyDocument, String)>, BackendError> {
        let file = match self.client.get_file(path).await {
            Ok(Some(file)) => file,
            Ok(None) => return Ok(None),
            Err(GitHubError::NotAFile { path }) => {
                return Err(BackendError::handler(
                    StatusCode::BAD_GATEWAY,
                    format!("Conversation path {} is not a file", path),
                ))
            }
            Err(e) => return Err(e.into()),
        };

        let document = DailyDocument::from_slice(&file.bytes).map_err(|e| {
            tracing::error!("Stored document {} does not decode: {}", path, e);
            BackendError::handler(
                StatusCode::BAD_GATEWAY,
                "Stored conversation document is not valid JSON",
            )
            .with_details(serde_json::json!({ "path": path, "reason": e.to_string() }))
        })?;
        Ok(Some((document, file.sha)))
    }
}
