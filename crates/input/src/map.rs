//! Key mapping from terminal events to viewer actions.

use crate::types::ViewAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewAction> {
    match key.code {
        KeyCode::Right
        | KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(ViewAction::NextRule),
        KeyCode::Left
        | KeyCode::Char('p')
        | KeyCode::Char('P')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(ViewAction::PrevRule),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(ViewAction::Replay),
        KeyCode::Char(' ') => Some(ViewAction::Pause),
        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
