//! Header bar: app title, display mode and panel tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rlens_app::ViewState;
use rlens_core::DisplayMode;

use super::PanelTabs;
use crate::theme::{styles, Palette};

pub struct MainHeader<'a> {
    view: ViewState,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: ViewState, palette: &'a Palette) -> Self {
        Self { view, palette }
    }

    fn title_row(&self) -> Line<'static> {
        let p = self.palette;
        let mode = match self.view.display_mode {
            DisplayMode::Dark => "☾ Dark",
            DisplayMode::Light => "☀ Light",
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled("●", styles::accent(p)),
            Span::raw(" "),
            Span::styled("Reddit Lens", styles::accent_bold(p)),
            Span::styled("  /  ", styles::text_muted(p)),
            Span::styled(mode, styles::text_secondary(p)),
            Span::styled(" (Ctrl+T)", styles::text_muted(p)),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_area = Rect { height: 1, ..inner };
        Paragraph::new(self.title_row()).render(title_area, buf);

        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            PanelTabs::new(self.view.active.panel(), self.palette).render(tabs_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;
    use rlens_app::ActiveView;
    use rlens_core::PanelId;

    #[test]
    fn test_header_renders_title_and_mode() {
        let mut term = TestTerminal::with_size(80, 4);
        let view = ViewState {
            active: ActiveView::Panel(PanelId::Insights),
            display_mode: DisplayMode::Light,
        };
        term.render_widget(MainHeader::new(view, &LIGHT), term.area());

        assert!(term.buffer_contains("Reddit Lens"));
        assert!(term.buffer_contains("Light"));
        assert!(term.line_contains(2, "User Insights"));
    }
}
