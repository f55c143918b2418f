use serde::{Deserialize, Serialize};

/// A single chat message extracted from an export.
///
/// `index` is the message's position in chronological (oldest-first) order and is
/// dense across the list returned by one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub index: usize,
    pub sender: String,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub reactions: Vec<String>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_current_user: bool,
}

impl Message {
    /// Case-insensitive substring match against sender or content.
    ///
    /// `lowercase_query` must already be lowercased; callers searching many messages
    /// fold the query once.
    pub fn matches_lowercase(&self, lowercase_query: &str) -> bool {
        self.content.to_lowercase().contains(lowercase_query)
            || self.sender.to_lowercase().contains(lowercase_query)
    }
}
