//! repostore - Main Library
//!
//! repostore exposes a small HTTP API that treats a repository on a remote
//! version-controlled file host as a JSON document store. Chat messages are
//! appended to one document per conversation per day, each write conditioned
//! on the content hash read just before it, so concurrent writers never
//! silently overwrite one another.
//!
//! # Module Structure
//!
//! - **`shared`** - Types and pure logic
//!   - Chat records and daily documents, conversation keys
//!   - Filename/path validators, image sniffing
//!   - Configuration and shared error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Typed client for the remote contents API
//!   - The append-only message store
//!   - Axum handlers, rate limiting and security headers
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use repostore::backend::server::init::create_app;
//! use repostore::shared::AppConfig;
//!
//! # async fn example() {
//! let config = AppConfig::builder().token("ghp_example").build().unwrap();
//! let app = create_app(config).await.unwrap();
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation and decoding failures
//! - `backend::github::GitHubError` for remote API failures
//! - `backend::error::BackendError` for handler results, convertible to HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
