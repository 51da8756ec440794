//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (file + environment)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `config::load_config`
//! 2. **State Creation**: remote client, message store, rate limiters
//! 3. **Background Tasks**: rate limiter cleanup
//! 4. **Router Creation**: all routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use repostore::backend::server::{create_app, config::load_config};
//!
//! # async fn example() {
//! let config = load_config().unwrap();
//! let app = create_app(config).await.unwrap();
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
