//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use eastward::application::BrowserAction;

/// Convert a keyboard event to a BrowserAction
pub fn key_to_action(key: KeyEvent) -> Option<BrowserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(BrowserAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(BrowserAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(BrowserAction::Down),
        KeyCode::Home | KeyCode::Char('g') => Some(BrowserAction::Top),
        KeyCode::End | KeyCode::Char('G') => Some(BrowserAction::Bottom),
        KeyCode::Enter | KeyCode::Char(' ') => Some(BrowserAction::Activate),
        KeyCode::Right | KeyCode::Char('l') => Some(BrowserAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(BrowserAction::Collapse),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(BrowserAction::Copy),
        KeyCode::Char('s') | KeyCode::Tab => Some(BrowserAction::ToggleSidebar),
        KeyCode::Char('K') => Some(BrowserAction::ScrollUp),
        KeyCode::Char('J') => Some(BrowserAction::ScrollDown),
        KeyCode::PageUp => Some(BrowserAction::PageUp),
        KeyCode::PageDown => Some(BrowserAction::PageDown),
        KeyCode::Char('q') | KeyCode::Esc => Some(BrowserAction::Quit),
        _ => None,
    }
}
