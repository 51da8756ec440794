//! File Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs    - Module exports and documentation
//! ├── list.rs   - GET /api/list
//! ├── read.rs   - GET /api/read
//! ├── write.rs  - POST /api/write
//! └── delete.rs - POST /api/delete
//! ```

/// Repository root listing
pub mod list;

/// Single file read
pub mod read;

/// Create or update a file
pub mod write;

/// Guarded delete
pub mod delete;

pub use delete::delete_file;
pub use list::list_files;
pub use read::read_file;
pub use write::write_file;
