//! Shared Module
//!
//! Types and pure logic that do not depend on the HTTP server: chat records
//! and daily documents, conversation key derivation, file validators, image
//! sniffing and configuration. Everything here is usable without the `ssr`
//! feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Chat records and conversation keys
pub mod messaging;

/// Filename, path and size validators
pub mod files;

/// Magic-byte image detection
pub mod image;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use messaging::{ChatItem, DailyDocument};
pub use image::{detect_image, ImageFormat};
