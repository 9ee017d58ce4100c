//! Color palettes for the two display modes.

use ratatui::style::Color;
use rlens_core::DisplayMode;

/// Every color a widget may use. Widgets never name colors directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub input_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Text drawn on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
}

/// Reddit orange-red, shared by both modes.
const REDDIT_ORANGE: Color = Color::Rgb(255, 69, 0);

pub const DARK: Palette = Palette {
    background: Color::Rgb(11, 20, 22),
    card_bg: Color::Rgb(26, 26, 27),
    input_bg: Color::Rgb(39, 39, 41),
    border_dim: Color::Rgb(52, 53, 54),
    border_active: REDDIT_ORANGE,
    accent: REDDIT_ORANGE,
    contrast_fg: Color::White,
    text_primary: Color::Rgb(215, 218, 220),
    text_secondary: Color::Rgb(129, 131, 132),
    text_muted: Color::Rgb(86, 88, 89),
    status_green: Color::Rgb(70, 209, 96),
    status_red: Color::Rgb(255, 88, 91),
    status_yellow: Color::Rgb(255, 214, 53),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(218, 224, 230),
    card_bg: Color::White,
    input_bg: Color::Rgb(246, 247, 248),
    border_dim: Color::Rgb(204, 204, 204),
    border_active: REDDIT_ORANGE,
    accent: REDDIT_ORANGE,
    contrast_fg: Color::White,
    text_primary: Color::Rgb(28, 28, 28),
    text_secondary: Color::Rgb(87, 89, 90),
    text_muted: Color::Rgb(135, 138, 140),
    status_green: Color::Rgb(0, 121, 52),
    status_red: Color::Rgb(204, 0, 0),
    status_yellow: Color::Rgb(148, 103, 0),
};

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> &'static Palette {
        match mode {
            DisplayMode::Dark => &DARK,
            DisplayMode::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_select_distinct_palettes() {
        assert_eq!(Palette::for_mode(DisplayMode::Dark), &DARK);
        assert_eq!(Palette::for_mode(DisplayMode::Light), &LIGHT);
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }

    #[test]
    fn test_accent_shared_across_modes() {
        assert_eq!(DARK.accent, LIGHT.accent);
    }
}
