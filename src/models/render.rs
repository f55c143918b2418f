use serde::{Deserialize, Serialize};

use super::message::Message;

/// Horizontal placement of a message bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

/// Everything an exporter needs to lay out one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInstruction {
    pub index: usize,
    pub sender: String,
    pub content: String,
    pub timestamp: String,
    pub reactions: Vec<String>,
    pub alignment: Alignment,
    pub is_liked: bool,
    /// The viewer's own messages are shown without a sender line
    pub show_sender: bool,
}

impl From<&Message> for RenderInstruction {
    fn from(message: &Message) -> Self {
        let alignment = if message.is_current_user { Alignment::Right } else { Alignment::Left };
        Self {
            index: message.index,
            sender: message.sender.clone(),
            content: message.content.clone(),
            timestamp: message.timestamp.clone(),
            reactions: message.reactions.clone(),
            alignment,
            is_liked: message.is_liked,
            show_sender: !message.is_current_user,
        }
    }
}
