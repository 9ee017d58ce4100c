//! Landing view listing the available analyses

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use rlens_core::PanelId;
use unicode_width::UnicodeWidthStr;

use super::tabs::shortcut;
use crate::theme::{styles, Palette};

pub struct Landing<'a> {
    palette: &'a Palette,
}

impl<'a> Landing<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let label_width = PanelId::ALL
            .iter()
            .map(|id| id.label().width())
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            Line::from(Span::styled(
                "Analyze Reddit users and communities",
                styles::heading(p),
            )),
            Line::from(Span::styled(
                "Roasts, insights, sentiment and more, powered by a remote analysis service.",
                styles::text_secondary(p),
            )),
            Line::default(),
        ];

        for id in PanelId::ALL {
            let descriptor = id.descriptor();
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", shortcut(id)), styles::keybinding(p)),
                Span::styled(
                    format!("{:<width$}  ", descriptor.label, width = label_width),
                    styles::text_primary(p),
                ),
                Span::styled(descriptor.blurb, styles::text_muted(p)),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("1-9, 0", styles::keybinding(p)),
            Span::styled(" open a panel  ", styles::text_muted(p)),
            Span::styled("←/→", styles::keybinding(p)),
            Span::styled(" browse  ", styles::text_muted(p)),
            Span::styled("Ctrl+T", styles::keybinding(p)),
            Span::styled(" theme  ", styles::text_muted(p)),
            Span::styled("q", styles::keybinding(p)),
            Span::styled(" quit", styles::text_muted(p)),
        ]));
        lines
    }
}

impl Widget for Landing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).title(Span::styled(
            " Welcome ",
            styles::text_secondary(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
