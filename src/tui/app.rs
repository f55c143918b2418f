//! Terminal viewer state and event handling.
//!
//! The `App` owns a [`SearchEngine`] and all transient presentation state:
//!
//! - **Search input**: Every keystroke in search mode re-runs the search (incremental)
//! - **Focus**: The app subscribes to the engine's current-match notifications and scrolls
//!   the notified message into view on the next frame
//! - **Scrolling**: Line-based offset into the laid-out conversation, clamped at draw time
//! - **Status messages**: Transient feedback for clipboard operations and errors
//! - **Dirty state tracking**: Redraw only when state changes (or periodically for resizes)

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Datelike, Local};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

use super::events::{Action, InputMode, poll_event};
use super::layout::AppLayout;
use super::rendering::{ConversationView, RenderState, render_ui};
use crate::clipboard::copy_message_to_clipboard;
use crate::models::{Message, NavDirection};
use crate::search::SearchEngine;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
const MAX_QUERY_LEN: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    engine: SearchEngine,
    /// Written by the engine's match notifications, consumed when laying out a frame
    pending_focus: Rc<Cell<Option<usize>>>,
    title: String,
    mode: InputMode,
    search_input: String,
    /// First visible conversation line; `usize::MAX` means "newest message"
    scroll: usize,
    page_height: usize,
    visible_message: Option<usize>,
    current_year: i32,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(messages: Vec<Message>, title: impl Into<String>) -> Self {
        let pending_focus = Rc::new(Cell::new(None));
        let mut engine = SearchEngine::new(messages);
        let sink = Rc::clone(&pending_focus);
        engine.subscribe(move |index| sink.set(Some(index)));

        Self {
            engine,
            pending_focus,
            title: title.into(),
            mode: InputMode::Browse,
            search_input: String::new(),
            // Open at the newest message
            scroll: usize::MAX,
            page_height: 1,
            visible_message: None,
            current_year: Local::now().year(),
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Drop the status message once expired; returns whether one was dropped
    fn clear_expired_status(&mut self) -> bool {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
        }
        expired
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            if self.clear_expired_status() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let stale = now.duration_since(self.last_draw_time) >= Duration::from_millis(100);
            if self.needs_redraw || stale {
                terminal.draw(|frame| self.draw(frame))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100), self.mode)?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let inner = AppLayout::new(frame.area()).conversation_inner();
        let view = ConversationView::build(
            self.engine.messages(),
            self.engine.state(),
            inner.width as usize,
            self.current_year,
        );
        self.sync_scroll(&view, inner.height as usize);

        let state = RenderState {
            title: &self.title,
            search: self.engine.state(),
            search_input: &self.search_input,
            mode: self.mode,
            message_count: self.engine.messages().len(),
            scroll: self.scroll,
            status_message: self.status_message.as_ref(),
        };
        render_ui(frame, &view, &state);
    }

    /// Apply any pending focus request and clamp the scroll offset to the laid-out view
    fn sync_scroll(&mut self, view: &ConversationView, height: usize) {
        self.page_height = height.max(1);

        if let Some(index) = self.pending_focus.take()
            && let Some(offset) = view.scroll_to(index, height)
        {
            self.scroll = offset;
        }
        self.scroll = self.scroll.min(view.max_scroll(height));
        self.visible_message = view.message_at_line(self.scroll);
    }

    /// Handle a user action
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => match self.mode {
                InputMode::Search => {
                    self.mode = InputMode::Browse;
                    self.clear_search();
                }
                InputMode::Browse if self.engine.state().active => self.clear_search(),
                InputMode::Browse => self.should_quit = true,
            },
            Action::EnterSearch => {
                self.mode = InputMode::Search;
                self.needs_redraw = true;
            }
            Action::SubmitSearch => {
                self.mode = InputMode::Browse;
                let state = self.engine.state();
                if state.active && state.match_indices.is_empty() {
                    let text = format!("✗ No matches for \"{}\"", state.query);
                    self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
                }
                self.needs_redraw = true;
            }
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::NextMatch => self.navigate(NavDirection::Next),
            Action::PreviousMatch => self.navigate(NavDirection::Previous),
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-(self.page_height as isize)),
            Action::PageDown => self.scroll_by(self.page_height as isize),
            Action::ScrollTop => {
                self.scroll = 0;
                self.needs_redraw = true;
            }
            Action::ScrollBottom => {
                self.scroll = usize::MAX;
                self.needs_redraw = true;
            }
            Action::CopyToClipboard => self.copy_focused_message(),
            Action::None => {}
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.needs_redraw = true;
    }

    fn update_search(&mut self, c: char) {
        // Limit search query to 256 characters
        if self.search_input.chars().count() < MAX_QUERY_LEN {
            self.search_input.push(c);
            self.engine.search(&self.search_input);
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.engine.search(&self.search_input);
            self.needs_redraw = true;
        }
    }

    fn clear_search(&mut self) {
        self.search_input.clear();
        self.engine.clear();
        self.needs_redraw = true;
    }

    fn navigate(&mut self, direction: NavDirection) {
        if !self.engine.state().active {
            self.set_status("Press / to search", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }
        self.engine.navigate(direction);
        self.needs_redraw = true;
    }

    /// The current search match, or the message at the top of the viewport
    fn focused_message(&self) -> Option<&Message> {
        let index = self.engine.current_match().or(self.visible_message)?;
        self.engine.messages().get(index)
    }

    fn copy_focused_message(&mut self) {
        let result = match self.focused_message() {
            Some(message) => copy_message_to_clipboard(message),
            None => {
                let text = "✗ No message to copy";
                self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
                return;
            }
        };

        match result {
            Ok(()) => self.set_status(
                "✓ Copied to clipboard",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
