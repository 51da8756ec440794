//! Middleware Module
//!
//! Request processing shared by several routes.
//!
//! - **`rate_limit`** - Per-client sliding window rate limiting
//! - **`security`** - Hardening headers and CORS
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use axum::{middleware, routing::get, Router};
//! use repostore::backend::middleware::{rate_limit, SlidingWindowLimiter};
//!
//! let limiter = SlidingWindowLimiter::new(60, Duration::from_secs(60));
//! let router: Router = Router::new()
//!     .route("/api/list", get(|| async { "ok" }))
//!     .layer(middleware::from_fn_with_state(limiter, rate_limit));
//! ```

pub mod rate_limit;
pub mod security;

pub use rate_limit::{client_key, rate_limit, SlidingWindowLimiter};
pub use security::{cors_layer, with_security_headers, with_strict_csp};
