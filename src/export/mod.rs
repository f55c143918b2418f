//! Export of a parsed conversation to a document.
//!
//! The conversation is first reduced to an ordered list of
//! [`RenderInstruction`]s, one per message, carrying everything a layout needs
//! (alignment, sender visibility, like flag). Formats then consume that list:
//!
//! - [`ExportFormat::Text`] - paginated plain text, pages separated by form feeds
//! - [`ExportFormat::Markdown`] - one section per message
//! - [`ExportFormat::Json`] - the instructions themselves, pretty-printed
//!
//! Export failures never touch the message list, so a failed export can be retried.

pub mod document;
pub mod formats;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

pub use document::{Page, PageLayout, paginate, render_text};
pub use formats::{render_json, render_markdown};

use crate::models::{Message, RenderInstruction};

/// Output format for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

/// What was written by [`write_export`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub messages: usize,
    /// Page count for paginated formats, 1 otherwise
    pub pages: usize,
    pub bytes: usize,
}

/// One render instruction per message, in conversation order
pub fn build_render_instructions(messages: &[Message]) -> Vec<RenderInstruction> {
    messages.iter().map(RenderInstruction::from).collect()
}

/// Render `instructions` in `format` without touching the filesystem
///
/// Returns the document and its page count.
pub fn render_document(
    instructions: &[RenderInstruction],
    format: ExportFormat,
    layout: &PageLayout,
    title: &str,
) -> Result<(String, usize)> {
    match format {
        ExportFormat::Text => {
            let pages = paginate(instructions, layout);
            Ok((render_text(&pages, layout), pages.len()))
        }
        ExportFormat::Markdown => Ok((render_markdown(instructions, title), 1)),
        ExportFormat::Json => Ok((render_json(instructions)?, 1)),
    }
}

/// Render and write an export to `path`
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    instructions: &[RenderInstruction],
    layout: &PageLayout,
    title: &str,
) -> Result<ExportSummary> {
    let (document, pages) = render_document(instructions, format, layout, title)?;
    fs::write(path, &document)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    Ok(ExportSummary { messages: instructions.len(), pages, bytes: document.len() })
}
