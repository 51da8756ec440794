//! Chat Backend Module
//!
//! HTTP surface of the append-only message store. The storage logic itself
//! lives in `backend::store`; these handlers only decode requests, pick the
//! current date and shape responses.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use repostore::backend::chat::handlers::{append_message, read_conversation_day};
//! use repostore::backend::server::state::AppState;
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/api/chat", post(append_message).get(read_conversation_day))
//!     .with_state(state);
//! # }
//! ```

/// Chat HTTP handlers
pub mod handlers;

pub use handlers::{append_message, read_conversation_day};
