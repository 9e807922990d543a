//! Input handling - Key events to state changes
//!
//! Starting the lookup itself is left to the event loop, which owns the channel.

use crate::tui_state::{AppState, Submit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    /// Spawn a lookup for this raw input
    Fetch(String),
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Windows reports both press and release
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        (KeyCode::F(1), _) => {
            state.show_help = !state.show_help;
            return KeyAction::None;
        }
        _ => {}
    }

    // Modal notice swallows everything except dismissal
    if state.panel.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.dismiss_notice();
        }
        return KeyAction::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => match state.submit() {
            Submit::Start(raw) => KeyAction::Fetch(raw),
            Submit::Ignored | Submit::Rejected => KeyAction::None,
        },
        (KeyCode::Esc, _) => {
            state.show_help = false;
            KeyAction::None
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.clear_input();
            KeyAction::None
        }
        (KeyCode::Backspace, _) => {
            state.backspace();
            KeyAction::None
        }
        (KeyCode::Delete, _) => {
            state.delete();
            KeyAction::None
        }
        (KeyCode::Left, _) => {
            state.move_left();
            KeyAction::None
        }
        (KeyCode::Right, _) => {
            state.move_right();
            KeyAction::None
        }
        (KeyCode::Home, _) => {
            state.move_home();
            KeyAction::None
        }
        (KeyCode::End, _) => {
            state.move_end();
            KeyAction::None
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.insert_char(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
