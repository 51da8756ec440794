//! Chat Records and Daily Documents
//!
//! A `ChatItem` is one message as posted by a client. Besides the two
//! participant ids it may carry any other fields (category, media URL,
//! client timestamp...) which are stored and returned verbatim.
//!
//! A `DailyDocument` groups every item of one conversation for one calendar
//! day, in arrival order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::error::SharedError;

/// One chat record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatItem {
    /// Sender id
    pub from: String,
    /// Recipient id
    pub to: String,
    /// Every other field the client sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatItem {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// All items of one conversation for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyDocument {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub items: Vec<ChatItem>,
}

impl DailyDocument {
    /// Start a day's document with its first item
    pub fn new(date: NaiveDate, first: ChatItem) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            items: vec![first],
        }
    }

    /// Append an item at the end of the day
    pub fn push(&mut self, item: ChatItem) {
        self.items.push(item);
    }

    /// Decode a stored document
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SharedError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode as two-space indented JSON
    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>, SharedError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// Response of a successful append
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppendMessageResponse {
    /// Always `"ok"`
    pub status: String,
    /// Conversation folder key
    pub folder: String,
    /// Daily document file name
    pub file: String,
    /// Every item of the day, including the new one
    pub messages: Vec<ChatItem>,
}

/// Query for reading one conversation day
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationDayQuery {
    pub a: String,
    pub b: String,
    /// Defaults to today (UTC)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// One conversation day as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationDayResponse {
    pub folder: String,
    pub file: String,
    pub date: String,
    pub messages: Vec<ChatItem>,
}
