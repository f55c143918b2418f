//! Interactive conversation viewer
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;

use self::terminal::TerminalGuard;
use crate::models::Message;

/// Open the full-screen viewer on a parsed conversation.
///
/// Blocks until the user quits. The terminal is restored even if the event loop fails.
pub fn run_viewer(messages: Vec<Message>, title: &str) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(messages, title);

    let res = app.run(guard.terminal_mut());

    guard.restore()?;
    res
}
