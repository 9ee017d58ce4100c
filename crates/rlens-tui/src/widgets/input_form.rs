//! Input form of a mounted panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use rlens_app::PanelMachine;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, Palette};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CURSOR: &str = "▏";

/// Bordered input boxes, the submit control and the validation message
pub struct InputForm<'a> {
    machine: &'a PanelMachine,
    palette: &'a Palette,
    spinner_frame: usize,
}

impl<'a> InputForm<'a> {
    pub fn new(machine: &'a PanelMachine, palette: &'a Palette) -> Self {
        Self {
            machine,
            palette,
            spinner_frame: 0,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn render_field(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let field = &self.machine.descriptor().required_inputs[index];
        let value = self.machine.input(field.name).unwrap_or_default();
        let focused = index == self.machine.focus() && !self.machine.is_submitting();

        let block = styles::glass_block(p, focused).title(Span::styled(
            format!(" {} ", field.label),
            if focused {
                styles::accent(p)
            } else {
                styles::text_secondary(p)
            },
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        if value.is_empty() {
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent(p)));
            }
            spans.push(Span::styled(field.placeholder, styles::text_muted(p)));
        } else {
            let room = (inner.width as usize).saturating_sub(CURSOR.width());
            spans.push(Span::styled(
                visible_tail(value, room).to_string(),
                styles::text_primary(p),
            ));
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent(p)));
            }
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn submit_line(&self) -> Line<'static> {
        let p = self.palette;
        let label = self.machine.descriptor().submit_label;
        if self.machine.is_submitting() {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} {}… ", frame, label), styles::focused_selected(p)),
            ])
        } else {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} ", label), styles::focused_selected(p)),
                Span::styled("  Enter", styles::keybinding(p)),
                Span::styled(" to submit", styles::text_muted(p)),
            ])
        }
    }
}

/// Longest suffix of `value` that fits in `width` cells.
fn visible_tail(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut used = 0;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width {
            break;
        }
        start = i;
    }
    &value[start..]
}

impl Widget for InputForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fields = self.machine.descriptor().required_inputs.len();
        let mut y = area.y;
        for index in 0..fields {
            let height = 3.min(area.bottom().saturating_sub(y));
            if height == 0 {
                return;
            }
            self.render_field(index, Rect { y, height, ..area }, buf);
            y += height;
        }

        if y < area.bottom() {
            Paragraph::new(self.submit_line()).render(Rect { y, height: 1, ..area }, buf);
            y += 1;
        }

        if let (Some(rejection), true) = (self.machine.rejection(), y < area.bottom()) {
            let line = Line::from(Span::styled(
                format!(" {}", rejection),
                styles::status_red(self.palette),
            ));
            Paragraph::new(line).render(Rect { y, height: 1, ..area }, buf);
        }
    }
}
