//! Light and dark themes for the TUI.
//!
//! - `palette` - Color sets, one per [`DisplayMode`](rlens_core::DisplayMode)
//! - `styles` - Semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
