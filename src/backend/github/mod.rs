//! Remote Contents API Module
//!
//! Typed client for the version-controlled file host that backs every
//! endpoint of this server.
//!
//! - **`client`** - `GitHubClient`, one repository, one branch
//! - **`types`** - Wire types of the contents API
//! - **`error`** - `GitHubError`

pub mod client;
pub mod error;
pub mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use types::{CommitInfo, ContentEntry, ContentsResponse, RemoteFile, WriteResult};
