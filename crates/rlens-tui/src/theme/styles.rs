//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

/// Filled accent, used for the selected tab and the submit button
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green(p: &Palette) -> Style {
    Style::default().fg(p.status_green)
}

pub fn status_red(p: &Palette) -> Style {
    Style::default().fg(p.status_red)
}

pub fn status_yellow(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}
