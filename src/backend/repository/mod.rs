//! Repository Module
//!
//! Read-only views over whole repositories rather than single files:
//! repository metadata and the versioned content tree.

pub mod handlers;
pub mod versions;

pub use handlers::{get_repository, list_versions};
pub use versions::{TreeNode, VersionContent, VersionFolder, VersionReader, VersionsResponse};
