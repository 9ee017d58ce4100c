//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use rlens_gateway::AnalysisGateway;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are handled in the same call. Handles of spawned
/// action tasks are pushed onto `tasks`.
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    gateway: &Arc<G>,
    tasks: &mut Vec<JoinHandle<()>>,
) where
    G: AnalysisGateway + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            tasks.push(handle_action(action, msg_tx.clone(), gateway.clone()));
        }

        // Continue with follow-up message
        msg = result.message;
    }

    tasks.retain(|task| !task.is_finished());
}
