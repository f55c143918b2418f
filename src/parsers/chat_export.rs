use std::path::Path;

use anyhow::{Context, Result};

use super::error::ParseError;
use super::markup::{MarkupDocument, first_text, text_content};
use crate::config::ParserConfig;
use crate::models::Message;
use crate::utils::read_export_file;

/// Counters describing what a parse kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Message blocks matched by the block selector
    pub blocks_found: usize,
    /// Blocks discarded because their content is in the garbled encoding
    pub garbled_skipped: usize,
    /// Reactions dropped because they were attributed to the self identity
    pub self_reactions_dropped: usize,
    pub liked_messages: usize,
}

impl ParseReport {
    /// One-line description of a parse that kept `messages` messages
    pub fn summary(&self, messages: usize) -> String {
        format!(
            "{} messages ({} garbled blocks skipped, {} liked by you, {} of your reactions hidden)",
            messages, self.garbled_skipped, self.liked_messages, self.self_reactions_dropped
        )
    }
}

/// Messages plus the report from the parse that produced them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExport {
    pub messages: Vec<Message>,
    pub report: ParseReport,
}

/// Parse a chat export into chronologically ordered messages.
///
/// Returns an empty list when the document has no message blocks.
///
/// # Errors
///
/// Fails only when the input is not markup at all or a configured selector is invalid.
pub fn parse_chat_export(raw: &str, config: &ParserConfig) -> Result<Vec<Message>, ParseError> {
    parse_chat_export_with_report(raw, config).map(|parsed| parsed.messages)
}

/// Same as [`parse_chat_export`] but also returns a [`ParseReport`]
pub fn parse_chat_export_with_report(
    raw: &str,
    config: &ParserConfig,
) -> Result<ParsedExport, ParseError> {
    let schema = config.schema.compile()?;
    let document = MarkupDocument::parse(raw)?;

    // The export lists blocks newest first
    let mut blocks = document.find_all(&schema.block);
    blocks.reverse();

    let like_marker = config.self_like_marker();
    let mut report = ParseReport { blocks_found: blocks.len(), ..ParseReport::default() };
    let mut messages = Vec::with_capacity(blocks.len());

    for block in blocks {
        let raw_content = first_text(block, &schema.content);
        if contains_garbled_script(&raw_content) {
            report.garbled_skipped += 1;
            continue;
        }

        let sender = first_text(block, &schema.sender);
        let timestamp = first_text(block, &schema.timestamp);

        let mut reactions = Vec::new();
        for item in block.select(&schema.reaction) {
            let reaction = text_content(item);
            if reaction.contains(config.self_identity.as_str()) {
                report.self_reactions_dropped += 1;
            } else {
                reactions.push(reaction);
            }
        }

        let is_liked = raw_content.contains(&like_marker);
        let content = if is_liked {
            report.liked_messages += 1;
            strip_like_line(&raw_content, &like_marker).to_string()
        } else {
            raw_content
        };

        let is_current_user = sender.trim() == config.self_identity;

        messages.push(Message {
            index: messages.len(),
            sender,
            content,
            timestamp,
            reactions,
            is_liked,
            is_current_user,
        });
    }

    Ok(ParsedExport { messages, report })
}

/// Read and parse an export file, printing a summary to stderr when blocks were skipped
pub fn parse_chat_export_file(path: &Path, config: &ParserConfig) -> Result<Vec<Message>> {
    let raw = read_export_file(path)?;
    let parsed = parse_chat_export_with_report(&raw, config)
        .with_context(|| format!("Invalid chat export file: {}", path.display()))?;

    if parsed.report.garbled_skipped > 0 {
        eprintln!("Parsed {}: {}", path.display(), parsed.report.summary(parsed.messages.len()));
    }
    if parsed.report.blocks_found == 0 {
        eprintln!("Warning: No message blocks found in {}", path.display());
    }

    Ok(parsed.messages)
}

/// Whether `text` contains Telugu (U+0C00-U+0C7F) or Kannada (U+0C80-U+0CFF) code points.
///
/// The export emits these for a corrupted encoding, so such blocks are never shown.
pub fn contains_garbled_script(text: &str) -> bool {
    text.chars().any(|c| ('\u{0C00}'..='\u{0CFF}').contains(&c))
}

/// Keep only the first line of liked content; the marker sits on a trailing line.
///
/// When the marker shares the first line it is cut off there, so the result never
/// contains it.
fn strip_like_line<'a>(content: &'a str, like_marker: &str) -> &'a str {
    let first_line = content.split('\n').next().unwrap_or("");
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    match first_line.find(like_marker) {
        Some(pos) => first_line[..pos].trim_end(),
        None => first_line,
    }
}
