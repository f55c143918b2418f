use ratatui::Frame;
use ratatui::layout::{Alignment as TextAlignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::events::InputMode;
use super::layout::AppLayout;
use crate::config::LIKE_EMOJI;
use crate::models::{Message, SearchState};
use crate::utils::{compact_timestamp, sanitize_for_terminal, wrap_text};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const OTHER_BUBBLE: Color = Color::Rgb(39, 39, 42);
const OWN_BUBBLE: Color = Color::Rgb(59, 130, 246);
const HIGHLIGHT: Color = Color::Rgb(250, 204, 21);
const ERROR: Color = Color::Rgb(239, 68, 68);
const SUCCESS: Color = Color::Rgb(16, 185, 129);

/// Everything besides the conversation lines needed to draw a frame
pub struct RenderState<'a> {
    pub title: &'a str,
    pub search: &'a SearchState,
    pub search_input: &'a str,
    pub mode: InputMode,
    pub message_count: usize,
    pub scroll: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// The whole conversation laid out as terminal lines for a given width.
///
/// `message_starts[i]` is the first line of the message at position `i`. Parsed
/// messages are densely indexed, so position and `Message::index` coincide.
pub struct ConversationView {
    lines: Vec<Line<'static>>,
    message_starts: Vec<usize>,
}

impl ConversationView {
    pub fn build(
        messages: &[Message],
        search: &SearchState,
        width: usize,
        current_year: i32,
    ) -> Self {
        // Bubbles take three quarters of the pane, minus padding and the match marker
        let bubble_width = (width * 3 / 4).saturating_sub(3).max(1);
        let mut lines = Vec::new();
        let mut message_starts = Vec::with_capacity(messages.len());

        for message in messages {
            message_starts.push(lines.len());
            lines.extend(message_lines(message, search, bubble_width, current_year));
        }

        Self { lines, message_starts }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn max_scroll(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height)
    }

    /// Scroll offset placing message `index` a third of the way down the viewport
    pub fn scroll_to(&self, index: usize, height: usize) -> Option<usize> {
        let start = *self.message_starts.get(index)?;
        Some(start.saturating_sub(height / 3).min(self.max_scroll(height)))
    }

    /// Message whose block contains `line`
    pub fn message_at_line(&self, line: usize) -> Option<usize> {
        self.message_starts.partition_point(|&start| start <= line).checked_sub(1)
    }
}

fn message_lines(
    message: &Message,
    search: &SearchState,
    bubble_width: usize,
    current_year: i32,
) -> Vec<Line<'static>> {
    let is_current = search.current_match() == Some(message.index);
    let is_match = search.active && search.is_match(message.index);
    let own = message.is_current_user;

    let alignment = if own { TextAlignment::Right } else { TextAlignment::Left };
    let meta_style = Style::default().fg(MUTED);
    let bubble_style = if is_current {
        Style::default().fg(SURFACE).bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else if own {
        Style::default().fg(BRIGHT).bg(OWN_BUBBLE)
    } else {
        Style::default().fg(BRIGHT).bg(OTHER_BUBBLE)
    };
    let marker = if is_match {
        Span::styled("▌", Style::default().fg(HIGHLIGHT))
    } else {
        Span::raw(" ")
    };

    let mut lines = Vec::new();

    if !own && !message.sender.trim().is_empty() {
        lines.push(
            Line::from(Span::styled(
                format!("  {}", sanitize_for_terminal(&message.sender)),
                meta_style.add_modifier(Modifier::BOLD),
            ))
            .alignment(alignment),
        );
    }

    let mut content = sanitize_for_terminal(&message.content);
    if message.is_liked {
        content.push(' ');
        content.push_str(LIKE_EMOJI);
    }
    for chunk in wrap_text(&content, bubble_width) {
        let bubble = Span::styled(format!(" {} ", chunk), bubble_style);
        let spans = if own { vec![bubble, marker.clone()] } else { vec![marker.clone(), bubble] };
        lines.push(Line::from(spans).alignment(alignment));
    }

    if !message.reactions.is_empty() {
        let reactions = sanitize_for_terminal(&message.reactions.join(" "));
        lines.push(
            Line::from(Span::styled(format!("  {}  ", reactions), meta_style)).alignment(alignment),
        );
    }

    if !message.timestamp.trim().is_empty() {
        let timestamp = sanitize_for_terminal(&compact_timestamp(&message.timestamp, current_year));
        lines.push(
            Line::from(Span::styled(
                format!("  {}  ", timestamp),
                meta_style.add_modifier(Modifier::DIM),
            ))
            .alignment(alignment),
        );
    }

    lines.push(Line::default());
    lines
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, view: &ConversationView, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_bar(frame, layout.search_area, state);
    render_conversation(frame, layout.conversation_area, view, state);
    render_status_bar(frame, layout.status_area, state);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let border_color = if state.mode == InputMode::Search { HIGHLIGHT } else { MUTED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = match state.search.position_label() {
        Some(label) => label,
        None if state.search.active => "No matches".to_string(),
        None => String::new(),
    };
    let label_width = label.chars().count() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(label_width)])
        .split(inner);

    let query = sanitize_for_terminal(state.search_input);
    let input_line = match state.mode {
        InputMode::Search => Line::from(vec![
            Span::styled("/", Style::default().fg(HIGHLIGHT)),
            Span::raw(query),
            Span::styled("█", Style::default().fg(HIGHLIGHT)),
        ]),
        InputMode::Browse if query.is_empty() => {
            Line::from(Span::styled("Press / to search messages", Style::default().fg(MUTED)))
        }
        InputMode::Browse => {
            Line::from(vec![Span::styled("/", Style::default().fg(MUTED)), Span::raw(query)])
        }
    };
    frame.render_widget(Paragraph::new(input_line), chunks[0]);

    let label_color = if state.search.active && state.search.match_indices.is_empty() {
        ERROR
    } else {
        HIGHLIGHT
    };
    frame.render_widget(
        Paragraph::new(label)
            .style(Style::default().fg(label_color))
            .alignment(TextAlignment::Right),
        chunks[1],
    );
}

fn render_conversation(
    frame: &mut Frame,
    area: Rect,
    view: &ConversationView,
    state: &RenderState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(format!(" {} ", sanitize_for_terminal(state.title)));

    let height = area.height.saturating_sub(2) as usize;
    let text = if view.lines().is_empty() {
        Text::from(Line::from(Span::styled(
            "No messages in this export",
            Style::default().fg(MUTED),
        )))
    } else {
        let end = state.scroll.saturating_add(height).min(view.lines().len());
        let start = state.scroll.min(end);
        Text::from(view.lines()[start..end].to_vec())
    };

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => SUCCESS,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(color).bg(SURFACE))
    } else {
        let mut parts = vec![format!("{} messages", state.message_count)];
        match state.mode {
            InputMode::Search => {
                parts.push("Enter: done".to_string());
                parts.push("Esc: clear".to_string());
                parts.push("Ctrl+N/P: next/prev".to_string());
            }
            InputMode::Browse => {
                parts.push("/: search".to_string());
                if state.search.active {
                    parts.push("n/N: next/prev".to_string());
                    parts.push("Esc: clear".to_string());
                }
                parts.push("Ctrl+Y: copy".to_string());
                parts.push("q: quit".to_string());
            }
        }
        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(SURFACE))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
