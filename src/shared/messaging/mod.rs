//! Messaging Module
//!
//! This module contains the data structures of the chat store:
//!
//! - `ChatItem` - One message record
//! - `DailyDocument` - One day of a conversation
//! - Conversation key and document path derivation
//!
//! # Usage
//!
//! ```rust
//! use repostore::shared::messaging::{conversation_key, ChatItem};
//!
//! let item = ChatItem::new("bob", "alice");
//! assert_eq!(conversation_key(&item.from, &item.to), "alice_bob");
//! ```

pub mod conversation;
pub mod message;

// Re-export all types
pub use conversation::{
    conversation_key, daily_document_path, daily_file_name, validate_participant,
    DEFAULT_MESSAGES_ROOT,
};
pub use message::{
    AppendMessageResponse, ChatItem, ConversationDayQuery, ConversationDayResponse,
    DailyDocument,
};
