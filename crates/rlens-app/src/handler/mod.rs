//! Handler module - TEA update function and event handlers
//!
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the landing and panel views

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::panel::Submission;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Perform one gateway call and report back with
    /// `Message::SubmissionCompleted`
    InvokeGateway(Submission),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
