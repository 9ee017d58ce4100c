//! Key event handlers for the landing and panel views

use rlens_core::PanelId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use crate::view::ActiveView;

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.view.active() {
        ActiveView::Landing => handle_key_landing(key),
        ActiveView::Panel(_) => handle_key_panel(key),
    }
}

/// Handle key events on the landing view
fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('t') => Some(Message::ToggleDisplayMode),

        // '1'..'9' open the first nine panels, '0' the tenth
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            PanelId::from_index(index).map(Message::SelectPanel)
        }
        InputKey::Char('0') => PanelId::from_index(9).map(Message::SelectPanel),

        InputKey::Right | InputKey::Enter => Some(Message::NextPanel),
        InputKey::Left => Some(Message::PrevPanel),

        _ => None,
    }
}

/// Handle key events while a panel is mounted
fn handle_key_panel(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('t') => Some(Message::ToggleDisplayMode),
        InputKey::CharCtrl('u') => Some(Message::ClearInput),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Esc => Some(Message::ShowLanding),
        InputKey::Left => Some(Message::PrevPanel),
        InputKey::Right => Some(Message::NextPanel),

        // ─────────────────────────────────────────────────────────
        // Form
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::FocusNextField),
        InputKey::BackTab => Some(Message::FocusPrevField),
        InputKey::Enter => Some(Message::Submit),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        // ─────────────────────────────────────────────────────────
        // Result scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),

        _ => None,
    }
}
