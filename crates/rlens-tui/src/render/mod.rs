//! Main render/view function (View in TEA pattern)


use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use ratatui::Frame;
use rlens_app::AppState;

use crate::theme::{styles, Palette};
use crate::{layout, terminal, widgets};

/// Shown in place of a result whose rendering panicked
pub const RENDER_FAULT_MESSAGE: &str = "Something went wrong displaying this result";

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.display_mode());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(
        widgets::MainHeader::new(state.view_state(), palette),
        areas.header,
    );

    match state.view.mounted() {
        None => frame.render_widget(widgets::Landing::new(palette), areas.body),
        Some(machine) => {
            let panel_areas =
                layout::split_panel(areas.body, machine.descriptor().required_inputs.len());
            frame.render_widget(
                widgets::InputForm::new(machine, palette).spinner_frame(state.spinner_frame),
                panel_areas.form,
            );
            render_isolated(
                frame.buffer_mut(),
                panel_areas.result,
                palette,
                widgets::ResultView::new(machine, palette).scroll(state.result_scroll),
            );
        }
    }

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);
}

/// Render `widget` into a scratch buffer and copy it over on success.
///
/// A panic while rendering one panel's result must not take down the rest of
/// the screen; the area shows [`RENDER_FAULT_MESSAGE`] instead.
pub fn render_isolated<W: Widget>(buf: &mut Buffer, area: Rect, palette: &Palette, widget: W) {
    let rendered = terminal::isolated(|| {
        let mut scratch = Buffer::empty(area);
        widget.render(area, &mut scratch);
        scratch
    });

    match rendered {
        Ok(scratch) => buf.merge(&scratch),
        Err(_) => render_fault(buf, area, palette),
    }
}

fn render_fault(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let block = styles::glass_block(palette, false);
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(Line::from(Span::styled(
        RENDER_FAULT_MESSAGE,
        styles::status_red(palette),
    )))
    .wrap(Wrap { trim: true })
    .render(inner, buf);
}
