//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Chat, repository and health routes
//! └── file_routes.rs  - File access and image upload routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use repostore::backend::routes::create_router;
//! use repostore::backend::server::state::AppState;
//! use repostore::shared::AppConfig;
//!
//! let state = AppState::new(AppConfig::default()).unwrap();
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// Chat, repository and health routes
pub mod api_routes;

/// File access and image upload routes
pub mod file_routes;

// Re-export commonly used functions
pub use router::create_router;
