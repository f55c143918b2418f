use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::Message;

/// Maximum clipboard payload (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Clipboard sink (mocked in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Plain-text form of a message: `Sender (timestamp): content`
///
/// Empty sender or timestamp parts are left out.
pub fn format_message_for_clipboard(message: &Message) -> String {
    let sender = message.sender.trim();
    let timestamp = message.timestamp.trim();

    match (sender.is_empty(), timestamp.is_empty()) {
        (false, false) => format!("{} ({}): {}", sender, timestamp, message.content),
        (false, true) => format!("{}: {}", sender, message.content),
        (true, false) => format!("({}): {}", timestamp, message.content),
        (true, true) => message.content.clone(),
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }
    Ok(())
}

fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

/// Copy a message to the system clipboard.
///
/// # Errors
///
/// Returns an error if the formatted text is empty or larger than 10MB (checked before
/// the clipboard is touched), or if the system clipboard is unavailable.
pub fn copy_message_to_clipboard(message: &Message) -> Result<()> {
    let text = format_message_for_clipboard(message);
    // Validate first so headless environments still get a useful error
    validate_clipboard_text(&text)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(&text, &mut clipboard)
}
