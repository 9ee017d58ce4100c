//! Custom widget components

mod header;
mod input_form;
mod landing;
pub mod result_view;
mod status_bar;
mod tabs;

pub use header::MainHeader;
pub use input_form::{InputForm, SPINNER_FRAMES};
pub use landing::Landing;
pub use result_view::{plain_text, result_lines, ResultView};
pub use status_bar::StatusBar;
pub use tabs::{shortcut, PanelTabs};
