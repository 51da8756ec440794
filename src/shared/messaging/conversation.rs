//! Conversation Keys
//!
//! A conversation between two participants is stored under a folder whose name
//! does not depend on who sent first: the two ids are sorted and joined with `_`.
//! Each calendar day gets its own document inside that folder.

use chrono::NaiveDate;

use crate::shared::error::SharedError;
use crate::shared::files::is_valid_filename;

/// Separator placed between the two sorted participant ids
pub const KEY_SEPARATOR: char = '_';

/// Default folder holding every conversation
pub const DEFAULT_MESSAGES_ROOT: &str = "messages";

/// Build the order-independent folder key for two participants.
pub fn conversation_key(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{first}{KEY_SEPARATOR}{second}")
}

/// File name of the document holding one day of a conversation
pub fn daily_file_name(date: NaiveDate) -> String {
    format!("{}.json", date.format("%Y-%m-%d"))
}

/// Full repository path of a conversation's daily document
pub fn daily_document_path(root: &str, key: &str, date: NaiveDate) -> String {
    format!("{}/{}/{}", root.trim_matches('/'), key, daily_file_name(date))
}

/// Participant ids become part of a repository path, so they share the filename rules.
pub fn validate_participant(field: &str, id: &str) -> Result<(), SharedError> {
    if id.trim().is_empty() {
        return Err(SharedError::validation(field, "Participant id is required"));
    }
    if !is_valid_filename(id) {
        return Err(SharedError::validation(
            field,
            "Participant id may use only alphanumeric characters, dash, underscore, and dot",
        ));
    }
    Ok(())
}
