//! rlens-app - Panel state machines and orchestration for Reddit Lens
//!
//! Implements the TEA (The Elm Architecture) loop: input arrives as
//! [`Message`]s, [`handler::update`] mutates [`AppState`], and gateway calls
//! are dispatched as [`UpdateAction`]s whose completions come back as
//! messages. [`Engine`] ties the loop to a message channel and a gateway.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod process;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{
    Completion, InstanceId, PanelMachine, RequestStatus, RequestToken, Submission,
    SubmitRejection,
};
pub use state::{AppPhase, AppState};
pub use view::{ActiveView, ViewController, ViewState};
