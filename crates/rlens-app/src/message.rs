//! Message types for the application (TEA pattern)

use rlens_core::PanelId;
use rlens_gateway::{GatewayError, RawPayload};

use crate::input_key::InputKey;
use crate::panel::RequestToken;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q on landing, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Mount a fresh instance of a panel
    SelectPanel(PanelId),
    /// Mount the next panel in tab order (first panel from landing)
    NextPanel,
    /// Mount the previous panel in tab order (last panel from landing)
    PrevPanel,
    /// Unmount the panel and show the landing view
    ShowLanding,
    /// Flip between light and dark display
    ToggleDisplayMode,

    // ─────────────────────────────────────────────────────────
    // Panel Form Messages
    // ─────────────────────────────────────────────────────────
    /// Set a named input of the mounted panel
    SetInput { field: String, value: String },
    /// Type into the focused input
    InputChar(char),
    /// Delete the last character of the focused input
    InputBackspace,
    /// Clear the focused input
    ClearInput,
    FocusNextField,
    FocusPrevField,
    /// Submit the mounted panel
    Submit,

    /// Gateway outcome for a submission, addressed by its token
    SubmissionCompleted {
        token: RequestToken,
        outcome: Result<RawPayload, GatewayError>,
    },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    PageUp,
    PageDown,
}
