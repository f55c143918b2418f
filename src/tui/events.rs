use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Whether keystrokes edit the search query or drive the conversation view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

/// User actions from keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Escape,
    EnterSearch,
    SubmitSearch,
    UpdateSearch(char),
    DeleteChar,
    NextMatch,
    PreviousMatch,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,
    CopyToClipboard,
    None,
}

/// Poll for keyboard events and convert to actions for the given mode
pub fn poll_event(timeout: Duration, mode: InputMode) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key, mode));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    // Bindings shared by both modes
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => return Action::NextMatch,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => return Action::PreviousMatch,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => return Action::CopyToClipboard,
        (KeyCode::Esc, _) => return Action::Escape,
        (KeyCode::Up, _) => return Action::ScrollUp,
        (KeyCode::Down, _) => return Action::ScrollDown,
        (KeyCode::PageUp, _) => return Action::PageUp,
        (KeyCode::PageDown, _) => return Action::PageDown,
        (KeyCode::Home, _) => return Action::ScrollTop,
        (KeyCode::End, _) => return Action::ScrollBottom,
        _ => {}
    }

    match mode {
        InputMode::Search => match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Action::SubmitSearch,
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                Action::UpdateSearch(c)
            }
            _ => Action::None,
        },
        InputMode::Browse => match (key.code, key.modifiers) {
            (KeyCode::Char('/'), KeyModifiers::NONE) => Action::EnterSearch,
            (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextMatch,
            (KeyCode::Char('N'), _) => Action::PreviousMatch,
            (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
            (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
            (KeyCode::Char('g'), KeyModifiers::NONE) => Action::ScrollTop,
            (KeyCode::Char('G'), _) => Action::ScrollBottom,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            _ => Action::None,
        },
    }
}
