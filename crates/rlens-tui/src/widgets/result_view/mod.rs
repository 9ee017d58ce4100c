//! Result area of a mounted panel
//!
//! [`result_lines`] turns a [`PanelResult`] into styled lines; the
//! [`ResultView`] widget frames them according to the panel's request status.

mod activity;
mod community;
mod format;
mod insights;
mod roast;

pub use format::NOT_AVAILABLE;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use rlens_app::{PanelMachine, RequestStatus};
use rlens_core::{PanelResult, TextBlock};

use crate::theme::{palette, styles, Palette};

/// Width of the text gauges, in cells
const GAUGE_WIDTH: usize = 30;

/// Styled lines for a successful result.
pub fn result_lines(result: &PanelResult, p: &Palette) -> Vec<Line<'static>> {
    match result {
        PanelResult::SubredditRoast(r) => roast::subreddit_roast(r, p),
        PanelResult::UserRoast(r) => roast::user_roast(r, p),
        PanelResult::Therapist(r) => roast::therapist(r, p),
        PanelResult::Insights(r) => insights::user_insights(r, p),
        PanelResult::Sentiment(r) => community::sentiment(r, p),
        PanelResult::CompareSubreddits(r) => community::comparison(r, p),
        PanelResult::RecommendSubreddits(r) => community::recommendations(r, p),
        PanelResult::ToxicityScore(r) => activity::toxicity(r, p),
        PanelResult::TimeMachine(r) => activity::time_machine(r, p),
        PanelResult::ViralPost(r) => activity::viral_prediction(r, p),
    }
}

/// Unstyled rendering of [`result_lines`], one line per row.
pub fn plain_text(result: &PanelResult) -> String {
    result_lines(result, &palette::DARK)
        .iter()
        .map(line_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

// ── Line builders shared by the per-panel modules ──────────────────────────

fn heading(text: impl Into<String>, p: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.into(), styles::accent_bold(p)))
}

fn section(text: &'static str, p: &Palette) -> Line<'static> {
    Line::from(Span::styled(text, styles::heading(p)))
}

fn field(label: &'static str, value: impl Into<String>, p: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), styles::text_secondary(p)),
        Span::styled(value.into(), styles::text_primary(p)),
    ])
}

fn bullet(text: impl Into<String>, p: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", styles::accent(p)),
        Span::styled(text.into(), styles::text_primary(p)),
    ])
}

fn muted(text: impl Into<String>, p: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.into(), styles::text_muted(p)))
}

fn gauge(ratio: f64, style: ratatui::style::Style) -> Line<'static> {
    Line::from(Span::styled(format::gauge_bar(ratio, GAUGE_WIDTH), style))
}

fn text_block(block: &TextBlock, p: &Palette) -> Vec<Line<'static>> {
    block
        .lines()
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), styles::text_primary(p))))
        .collect()
}

fn blank() -> Line<'static> {
    Line::default()
}

// ── Widget ──────────────────────────────────────────────────────────────────

/// Bordered result area for the mounted panel
pub struct ResultView<'a> {
    machine: &'a PanelMachine,
    palette: &'a Palette,
    scroll: u16,
}

impl<'a> ResultView<'a> {
    pub fn new(machine: &'a PanelMachine, palette: &'a Palette) -> Self {
        Self {
            machine,
            palette,
            scroll: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    fn content(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        match self.machine.status() {
            RequestStatus::Idle => vec![muted(
                format!(
                    "Fill in the form and press Enter to {}.",
                    self.machine.descriptor().submit_label.to_lowercase()
                ),
                p,
            )],
            RequestStatus::Submitting { .. } => vec![muted(
                "Waiting for the analysis service. The first request can take a while.",
                p,
            )],
            RequestStatus::Failed { message, .. } => {
                vec![Line::from(Span::styled(message.clone(), styles::status_red(p)))]
            }
            RequestStatus::Succeeded { result, .. } => result_lines(result, p),
        }
    }
}

impl Widget for ResultView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false).title(Span::styled(
            " Result ",
            styles::text_secondary(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.content()).wrap(Wrap { trim: false });
        // Wrapped rows, not logical lines
        let rows = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
        let max_scroll = rows.saturating_sub(inner.height);
        paragraph
            .scroll((self.scroll.min(max_scroll), 0))
            .render(inner, buf);
    }
}
