//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const SELF_NAME: &str = "Kumar Adarsh";

/// Builder for chat export HTML files.
///
/// Blocks are written in the order they are added, which is the export's own order:
/// newest message first.
pub struct ChatExportBuilder {
    title: String,
    blocks: Vec<BlockBuilder>,
}

impl ChatExportBuilder {
    pub fn new() -> Self {
        Self { title: "Alice".to_string(), blocks: Vec::new() }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Add a block after the previously added ones (so it is older)
    pub fn with_block(mut self, block: BlockBuilder) -> Self {
        self.blocks.push(block);
        self
    }

    /// Add blocks given oldest first, the way a conversation reads
    pub fn with_conversation(mut self, blocks: Vec<BlockBuilder>) -> Self {
        self.blocks.extend(blocks.into_iter().rev());
        self
    }

    pub fn to_html(&self) -> String {
        let blocks = self.blocks.iter().map(BlockBuilder::to_html).collect::<Vec<_>>().join("\n");
        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head>\n\
             <body><div class=\"_a706\" role=\"main\">\n{}\n</div></body></html>\n",
            escape(&self.title),
            blocks
        )
    }

    /// Write the export into a fresh temp directory as `message_1.html`
    pub fn write(&self) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("message_1.html");
        fs::write(&path, self.to_html()).expect("Failed to write export");
        (temp_dir, path)
    }
}

impl Default for ChatExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single message block
pub struct BlockBuilder {
    sender: Option<String>,
    content: Option<String>,
    timestamp: Option<String>,
    reactions: Vec<String>,
}

impl BlockBuilder {
    pub fn new(sender: &str, content: &str) -> Self {
        Self {
            sender: Some(sender.to_string()),
            content: Some(content.to_string()),
            timestamp: Some("Jan 05, 2024 3:12 pm".to_string()),
            reactions: Vec::new(),
        }
    }

    /// A block sent by the default self identity
    pub fn from_me(content: &str) -> Self {
        Self::new(SELF_NAME, content)
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn reaction(mut self, reaction: &str) -> Self {
        self.reactions.push(reaction.to_string());
        self
    }

    /// Append the self identity's like line to the content
    pub fn liked(mut self) -> Self {
        let content = self.content.take().unwrap_or_default();
        self.content = Some(format!("{}\n❤️ {}", content, SELF_NAME));
        self
    }

    pub fn without_sender(mut self) -> Self {
        self.sender = None;
        self
    }

    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"pam _3-95 _2ph- _a6-g uiBoxWhite noborder\">");
        if let Some(sender) = &self.sender {
            let sender = escape(sender);
            html.push_str(&format!("<div class=\"_3-95 _2pim _a6-h _a6-i\">{}</div>", sender));
        }
        html.push_str("<div class=\"_3-95 _a6-p\">");
        if let Some(content) = &self.content {
            html.push_str(&escape(content));
        }
        html.push_str("</div>");
        if let Some(timestamp) = &self.timestamp {
            html.push_str(&format!("<div class=\"_3-94 _a6-o\">{}</div>", escape(timestamp)));
        }
        if !self.reactions.is_empty() {
            html.push_str("<ul class=\"_a6-q\">");
            for reaction in &self.reactions {
                html.push_str(&format!("<li>{}</li>", escape(reaction)));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
        html
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
