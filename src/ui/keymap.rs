//! Key bindings for the cleaner TUI
//!
//! - printable characters and Enter edit the input
//! - `Ctrl-V` pastes the system clipboard, `Ctrl-Y` copies the result
//! - `PageUp`/`PageDown` scroll the cleaned result
//! - `Ctrl-L` clears, `Ctrl-T` toggles validation
//! - `F1` toggles help, `Esc` closes help or quits, `Ctrl-C` quits

use crate::app::AppEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal key event into an AppEvent
pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    if key.kind == KeyEventKind::Release {
        return AppEvent::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppEvent::Quit,
            KeyCode::Char('v') => AppEvent::PasteClipboard,
            KeyCode::Char('y') => AppEvent::CopyResult,
            KeyCode::Char('l') => AppEvent::Clear,
            KeyCode::Char('t') => AppEvent::ToggleValidation,
            _ => AppEvent::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => AppEvent::Insert(c),
        KeyCode::Enter => AppEvent::Newline,
        KeyCode::Backspace => AppEvent::Backspace,
        KeyCode::Delete => AppEvent::Delete,
        KeyCode::Left => AppEvent::CursorLeft,
        KeyCode::Right => AppEvent::CursorRight,
        KeyCode::Home => AppEvent::LineStart,
        KeyCode::End => AppEvent::LineEnd,
        KeyCode::PageUp => AppEvent::ScrollOutputUp,
        KeyCode::PageDown => AppEvent::ScrollOutputDown,
        KeyCode::F(1) => AppEvent::ToggleHelp,
        KeyCode::Esc => AppEvent::Cancel,
        _ => AppEvent::None,
    }
}
