//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Explicit status raised by a handler
//! - `Passthrough` - Remote status and body returned as-is
//! - `Remote` - Remote contents API failures
//! - `SharedError` - Validation and size errors from the shared module
//! - `SerializationError` - JSON serialization errors

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::set_development_mode;
pub use types::BackendError;
