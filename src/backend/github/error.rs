/**
 * Remote Contents API Errors
 *
 * Every failure talking to the remote file host is reported as a
 * `GitHubError`, tagged with the endpoint that failed so logs can be traced
 * back to a single request.
 */

use thiserror::Error;

/// Errors from the remote contents API client
#[derive(Debug, Error)]
pub enum GitHubError {
    /// No access token configured
    #[error("GitHub token is not configured")]
    MissingToken,

    /// Transport failure (connect, timeout, TLS)
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-success status
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The remote answered with a body we could not decode
    #[error("unexpected response from {endpoint}: {message}")]
    Deserialization { endpoint: String, message: String },

    /// File content was not valid base64
    #[error("content of {path} is not valid base64: {message}")]
    Decode { path: String, message: String },

    /// A directory was found where a file was expected
    #[error("{path} is not a file")]
    NotAFile { path: String },
}

impl GitHubError {
    pub(crate) fn http(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub(crate) fn deserialization(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::Deserialization {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// Remote HTTP status, if the remote answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote rejected a write because the content hash is stale.
    ///
    /// 409 is a hash mismatch. 422 counts only for a create (`sent_sha` false)
    /// racing an existing file, or when the remote's message names the sha;
    /// any other 422 is a validation error.
    pub fn is_stale_sha(&self, sent_sha: bool) -> bool {
        match self.status() {
            Some(409) => true,
            Some(422) => !sent_sha || self.message_mentions_sha(),
            _ => false,
        }
    }

    fn message_mentions_sha(&self) -> bool {
        let message = match self.body_json() {
            Some(serde_json::Value::Object(body)) => body
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_default(),
            Some(serde_json::Value::String(text)) => text,
            _ => String::new(),
        };
        message.to_ascii_lowercase().contains("sha")
    }

    /// Remote response body parsed as JSON when possible, else as a string
    pub fn body_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Api { body, .. } => Some(
                serde_json::from_str(body)
                    .unwrap_or_else(|_| serde_json::Value::String(body.clone())),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: &str) -> GitHubError {
        GitHubError::Api {
            endpoint: "PUT contents/x".into(),
            status,
            body: body.into(),
        }
    }

    #[test]
    fn stale_sha_statuses() {
        assert!(api(409, "").is_stale_sha(true));
        assert!(api(422, "").is_stale_sha(false));
        assert!(api(422, r#"{"message":"sha wasn't supplied"}"#).is_stale_sha(true));
        assert!(api(422, r#"{"message":"does not match 1a2b"}"#).is_stale_sha(false));
        assert!(!api(422, r#"{"message":"Invalid request. content is not valid Base64"}"#)
            .is_stale_sha(true));
        assert!(!api(404, "").is_stale_sha(true));
        assert!(!GitHubError::MissingToken.is_stale_sha(false));
    }

    #[test]
    fn body_json_falls_back_to_string() {
        assert_eq!(
            api(400, r#"{"message":"Bad"}"#).body_json().unwrap()["message"],
            "Bad"
        );
        assert_eq!(
            api(502, "gateway").body_json().unwrap(),
            serde_json::Value::String("gateway".into())
        );
        assert!(GitHubError::MissingToken.body_json().is_none());
    }
}
