//! Main update function - handles state transitions (TEA pattern)

use rlens_core::prelude::*;
use rlens_core::PanelId;

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::panel::Completion;
use crate::state::{AppPhase, AppState, PAGE_SCROLL_LINES};

/// Process a message and update state
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state
                .view
                .mounted()
                .is_some_and(|machine| machine.is_submitting())
            {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectPanel(id) => {
            state.view.select_panel(id);
            state.reset_scroll();
            UpdateResult::none()
        }

        Message::NextPanel => {
            let target = match state.view.active_panel() {
                Some(id) => id.next(),
                None => PanelId::ALL[0],
            };
            UpdateResult::message(Message::SelectPanel(target))
        }

        Message::PrevPanel => {
            let target = match state.view.active_panel() {
                Some(id) => id.prev(),
                None => PanelId::ALL[PanelId::ALL.len() - 1],
            };
            UpdateResult::message(Message::SelectPanel(target))
        }

        Message::ShowLanding => {
            state.view.show_landing();
            state.reset_scroll();
            UpdateResult::none()
        }

        Message::ToggleDisplayMode => {
            let mode = state.view.toggle_display_mode();
            debug!("Display mode is now {}", mode);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Panel Form Messages
        // ─────────────────────────────────────────────────────────
        Message::SetInput { field, value } => {
            if let Some(machine) = state.view.mounted_mut() {
                machine.edit_input(&field, value);
            }
            UpdateResult::none()
        }

        Message::InputChar(c) => {
            if let Some(machine) = state.view.mounted_mut() {
                machine.push_char(c);
            }
            UpdateResult::none()
        }

        Message::InputBackspace => {
            if let Some(machine) = state.view.mounted_mut() {
                machine.pop_char();
            }
            UpdateResult::none()
        }

        Message::ClearInput => {
            if let Some(machine) = state.view.mounted_mut() {
                machine.clear_focused();
            }
            UpdateResult::none()
        }

        Message::FocusNextField => {
            if let Some(machine) = state.view.mounted_mut() {
                machine.focus_next();
            }
            UpdateResult::none()
        }

        Message::FocusPrevField => {
            if let Some(machine) = state.view.mounted_mut() {
                machine.focus_prev();
            }
            UpdateResult::none()
        }

        Message::Submit => {
            let Some(machine) = state.view.mounted_mut() else {
                return UpdateResult::none();
            };
            match machine.submit() {
                Ok(submission) => {
                    state.reset_scroll();
                    state.spinner_frame = 0;
                    UpdateResult::action(UpdateAction::InvokeGateway(submission))
                }
                Err(_) => UpdateResult::none(),
            }
        }

        Message::SubmissionCompleted { token, outcome } => {
            if state.view.complete(token, outcome) == Completion::Applied {
                state.reset_scroll();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.result_scroll = state.result_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.result_scroll = state.result_scroll.saturating_add(1);
            UpdateResult::none()
        }

        Message::PageUp => {
            state.result_scroll = state.result_scroll.saturating_sub(PAGE_SCROLL_LINES);
            UpdateResult::none()
        }

        Message::PageDown => {
            state.result_scroll = state.result_scroll.saturating_add(PAGE_SCROLL_LINES);
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            state.reset_scroll();
            UpdateResult::none()
        }
    }
}
