//! File and Path Validators
//!
//! Whitelist checks applied to every user-supplied file name or repository
//! path before it is forwarded to the remote contents API.

use crate::shared::error::SharedError;

/// Longest accepted single file name
pub const MAX_FILENAME_LEN: usize = 255;

/// Longest accepted nested repository path
pub const MAX_PATH_LEN: usize = 1024;

/// Files that the delete endpoint refuses to remove
pub const PROTECTED_FILES: &[&str] = &["README.md", "LICENSE", ".gitignore", "package.json"];

/// Check a single file name: `[A-Za-z0-9_.-]` only, no traversal, at most 255 chars.
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_FILENAME_LEN {
        return false;
    }
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Check a `/`-separated repository path where every segment is a valid file name.
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || path.len() > MAX_PATH_LEN {
        return false;
    }
    path.split('/').all(is_valid_filename)
}

/// Whether the file name is on the protected list
pub fn is_protected_file(name: &str) -> bool {
    PROTECTED_FILES.contains(&name)
}

/// Validate a file name, naming the offending request field on failure.
pub fn validate_filename(field: &str, name: &str) -> Result<(), SharedError> {
    if is_valid_filename(name) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            "Invalid filename. Use only alphanumeric characters, dash, underscore, and dot.",
        ))
    }
}

/// Validate a nested repository path.
pub fn validate_path(field: &str, path: &str) -> Result<(), SharedError> {
    if is_valid_path(path) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            "Invalid path. Segments may use only alphanumeric characters, dash, underscore, and dot.",
        ))
    }
}

/// Reject content larger than `max` bytes.
pub fn check_content_size(len: usize, max: usize) -> Result<(), SharedError> {
    if len > max {
        Err(SharedError::too_large(max, len))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert!(is_valid_filename("notes.json"));
        assert!(is_valid_filename("2025-01-02.json"));
        assert!(is_valid_filename("user_42-a"));
        assert!(is_valid_filename(".gitignore"));
    }

    #[test]
    fn rejects_traversal_and_separators() {
        assert!(!is_valid_filename(""));
        assert!(!is_valid_filename(".."));
        assert!(!is_valid_filename("a..b"));
        assert!(!is_valid_filename("dir/file"));
        assert!(!is_valid_filename("dir\\file"));
        assert!(!is_valid_filename("semi;colon"));
        assert!(!is_valid_filename("space name"));
        assert!(!is_valid_filename("ünïcode"));
    }

    #[test]
    fn rejects_overlong_names() {
        let name = "a".repeat(MAX_FILENAME_LEN);
        assert!(is_valid_filename(&name));
        let name = "a".repeat(MAX_FILENAME_LEN + 1);
        assert!(!is_valid_filename(&name));
    }

    #[test]
    fn nested_paths() {
        assert!(is_valid_path("messages/a_b/2025-01-02.json"));
        assert!(!is_valid_path("/leading"));
        assert!(!is_valid_path("trailing/"));
        assert!(!is_valid_path("a//b"));
        assert!(!is_valid_path("a/../b"));
    }

    #[test]
    fn protected_list() {
        assert!(is_protected_file("README.md"));
        assert!(is_protected_file("package.json"));
        assert!(!is_protected_file("readme.md"));
        assert!(!is_protected_file("data.json"));
    }

    #[test]
    fn content_size_limit() {
        assert!(check_content_size(10, 10).is_ok());
        match check_content_size(11, 10) {
            Err(SharedError::PayloadTooLarge { limit, actual }) => {
                assert_eq!(limit, 10);
                assert_eq!(actual, 11);
            }
            other => panic!("Expected PayloadTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn validate_names_field() {
        match validate_filename("file", "../etc/passwd") {
            Err(SharedError::ValidationError { field, .. }) => assert_eq!(field, "file"),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
