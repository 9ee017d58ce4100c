//! Panel tabs shown in the header

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};
use rlens_core::PanelId;
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

/// Space taken by the divider and padding around each title
const TAB_CHROME: usize = 3;

/// One tab per panel, with the mounted panel highlighted
pub struct PanelTabs<'a> {
    selected: Option<PanelId>,
    palette: &'a Palette,
}

impl<'a> PanelTabs<'a> {
    pub fn new(selected: Option<PanelId>, palette: &'a Palette) -> Self {
        Self { selected, palette }
    }

    /// Full labels when they fit; otherwise shortcut digits with only the
    /// selected panel spelled out.
    fn titles(&self, width: u16) -> Vec<Line<'static>> {
        let full: usize = PanelId::ALL
            .iter()
            .map(|id| id.label().width() + TAB_CHROME)
            .sum();

        PanelId::ALL
            .iter()
            .map(|&id| {
                if full <= width as usize || Some(id) == self.selected {
                    Line::from(id.label())
                } else {
                    Line::from(shortcut(id).to_string())
                }
            })
            .collect()
    }
}

/// Landing-view shortcut for a panel: `1`..`9`, then `0`.
pub fn shortcut(id: PanelId) -> char {
    char::from_digit(((id.index() + 1) % 10) as u32, 10).unwrap_or('?')
}

impl Widget for PanelTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        let tabs = Tabs::new(self.titles(padded_area.width))
            .select(self.selected.map(PanelId::index))
            .style(styles::text_muted(self.palette))
            .highlight_style(styles::focused_selected(self.palette))
            .divider("│");

        tabs.render(padded_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    #[test]
    fn test_shortcut_digits() {
        assert_eq!(shortcut(PanelId::SubredditRoast), '1');
        assert_eq!(shortcut(PanelId::TimeMachine), '9');
        assert_eq!(shortcut(PanelId::RecommendSubreddits), '0');
    }

    #[test]
    fn test_narrow_tabs_spell_out_selected_only() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(
            PanelTabs::new(Some(PanelId::ToxicityScore), &DARK),
            term.area(),
        );
        assert!(term.buffer_contains("Toxicity Score"));
        assert!(!term.buffer_contains("Time Machine"));
    }

    #[test]
    fn test_wide_tabs_show_all_labels() {
        let mut term = TestTerminal::with_size(220, 1);
        term.render_widget(PanelTabs::new(None, &DARK), term.area());
        assert!(term.buffer_contains("Subreddit Roast"));
        assert!(term.buffer_contains("Subreddit Recommendations"));
    }
}
