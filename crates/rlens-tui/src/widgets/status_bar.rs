//! Status bar widget
//!
//! Shows the mounted panel's request status, when it last completed, and
//! the keys that apply to the current view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rlens_app::{AppState, RequestStatus};

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    /// Status indicator with its color
    fn state_indicator(&self) -> Span<'static> {
        let p = self.palette;
        let Some(machine) = self.state.view.mounted() else {
            return Span::styled("○ Ready", styles::text_muted(p));
        };

        let (text, style): (String, Style) = match machine.status() {
            RequestStatus::Idle => ("○ Idle".into(), styles::text_muted(p)),
            RequestStatus::Submitting { .. } => ("● Working".into(), styles::status_yellow(p)),
            RequestStatus::Succeeded { completed_at, .. } => (
                format!("● Completed {}", completed_at.format("%H:%M:%S")),
                styles::status_green(p),
            ),
            RequestStatus::Failed { completed_at, .. } => (
                format!("● Failed {}", completed_at.format("%H:%M:%S")),
                styles::status_red(p),
            ),
        };
        Span::styled(text, style)
    }

    fn key_hints(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let hints: &[(&'static str, &'static str)] = if self.state.view.mounted().is_some() {
            &[
                ("Enter", "submit"),
                ("Tab", "field"),
                ("←/→", "panel"),
                ("↑/↓", "scroll"),
                ("Esc", "home"),
            ]
        } else {
            &[("1-9,0", "open"), ("q", "quit")]
        };

        let mut spans = Vec::new();
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted(p)));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" "), self.state_indicator()];
        spans.push(Span::styled("  │  ", styles::text_muted(self.palette)));
        spans.extend(self.key_hints());

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.palette.card_bg))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use rlens_app::Message;
    use rlens_core::PanelId;

    #[test]
    fn test_status_bar_on_landing() {
        let state = AppState::new();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state, &DARK), term.area());

        assert!(term.buffer_contains("Ready"));
        assert!(term.buffer_contains("quit"));
    }

    #[test]
    fn test_status_bar_shows_working_while_submitting() {
        let mut state = AppState::new();
        rlens_app::handler::update(&mut state, Message::SelectPanel(PanelId::Therapist));
        rlens_app::handler::update(
            &mut state,
            Message::SetInput {
                field: "username".into(),
                value: "bob".into(),
            },
        );
        rlens_app::handler::update(&mut state, Message::Submit);

        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(&state, &DARK), term.area());
        assert!(term.buffer_contains("Working"));
    }
}
