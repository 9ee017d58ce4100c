//! Application state (Model in TEA pattern)

use rlens_core::DisplayMode;

use crate::config::Settings;
use crate::view::{ViewController, ViewState};

/// Number of lines a page scroll moves
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Visible panel and display mode
    pub view: ViewController,

    /// First visible line of the result area
    pub result_scroll: u16,

    /// Spinner frame, advanced on Tick while a request is outstanding
    pub spinner_frame: usize,

    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Build state from settings, opening `ui.start_panel` if set.
    pub fn with_settings(settings: Settings) -> Self {
        let mut view = ViewController::new(settings.ui.display_mode);
        if let Some(panel) = settings.ui.start_panel {
            view.select_panel(panel);
        }

        Self {
            phase: AppPhase::Running,
            view,
            result_scroll: 0,
            spinner_frame: 0,
            settings,
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.view.display_mode()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn reset_scroll(&mut self) {
        self.result_scroll = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
