//! Backend Module
//!
//! All server-side code: the Axum HTTP server, the typed client for the
//! remote contents API, and the message store built on top of it.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`github`** - Remote contents API client
//! - **`store`** - Append-only conversation store (optimistic concurrency)
//! - **`chat`** - Chat handlers
//! - **`files`** - Generic file list/read/write/delete handlers
//! - **`images`** - Image upload handler
//! - **`repository`** - Repository metadata and versioned content
//! - **`middleware`** - Rate limiting, security headers, CORS
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── github/         - Remote API client
//! ├── store/          - Message store
//! ├── chat/           - Chat handlers
//! ├── files/          - File handlers
//! ├── images/         - Image upload
//! ├── repository/     - Repository views
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! The server keeps no document state of its own. Every mutation of a
//! remote file sends the content hash read just before it; the remote
//! rejects the write if the file changed in between. The only in-process
//! shared state is the rate limiter maps.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Remote contents API client
pub mod github;

/// Append-only message store
pub mod store;

/// Chat handlers
pub mod chat;

/// File access handlers
pub mod files;

/// Image upload handler
pub mod images;

/// Repository metadata and versioned content
pub mod repository;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use github::{GitHubClient, GitHubError};
pub use server::create_app;
pub use store::{AppendOutcome, MessageStore};
