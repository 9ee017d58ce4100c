//! rlens-tui - Terminal UI for Reddit Lens
//!
//! Builds an [`Engine`](rlens_app::Engine) and adds terminal rendering,
//! event polling and the light/dark themes.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
pub use widgets::{plain_text, result_lines};
