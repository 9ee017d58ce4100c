//! Action handlers: execute UpdateActions outside the update function
//!
//! Each gateway call runs on its own tokio task and reports back through the
//! engine's message channel, so `handler::update` never awaits I/O.

use std::sync::Arc;

use rlens_core::prelude::*;
use rlens_gateway::AnalysisGateway;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::panel::Submission;

/// Execute an action in the background, returning the spawned task.
pub fn handle_action<G>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    gateway: Arc<G>,
) -> JoinHandle<()>
where
    G: AnalysisGateway + Send + Sync + 'static,
{
    match action {
        UpdateAction::InvokeGateway(submission) => spawn_invocation(submission, msg_tx, gateway),
    }
}

/// Invoke the gateway once and post the outcome tagged with the token.
fn spawn_invocation<G>(
    submission: Submission,
    msg_tx: mpsc::Sender<Message>,
    gateway: Arc<G>,
) -> JoinHandle<()>
where
    G: AnalysisGateway + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let Submission {
            token,
            endpoint_path,
            inputs,
        } = submission;

        debug!("Invoking {} for {:?}", endpoint_path, token);
        let outcome = gateway.invoke(endpoint_path, &inputs).await;

        if msg_tx
            .send(Message::SubmissionCompleted { token, outcome })
            .await
            .is_err()
        {
            // Engine shut down while the request was in flight
            debug!("Dropping completion for {:?}: channel closed", token);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{InstanceId, RequestToken};
    use rlens_gateway::test_utils::ScriptedGateway;
    use serde_json::json;

    fn submission() -> Submission {
        Submission {
            token: RequestToken {
                instance: InstanceId(3),
                seq: 0,
            },
            endpoint_path: "/reddit-therapist",
            inputs: [("username".to_string(), "bob".to_string())].into(),
        }
    }

    #[tokio::test]
    async fn test_invoke_gateway_posts_completion() {
        let gateway = ScriptedGateway::new();
        gateway.push_ok(json!({"advice": "rest"}));
        let (tx, mut rx) = mpsc::channel(4);

        let handle = handle_action(
            UpdateAction::InvokeGateway(submission()),
            tx,
            Arc::new(gateway.clone()),
        );
        handle.await.unwrap();

        match rx.recv().await {
            Some(Message::SubmissionCompleted { token, outcome }) => {
                assert_eq!(token.instance, InstanceId(3));
                assert_eq!(outcome.unwrap(), json!({"advice": "rest"}));
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(gateway.call_count(), 1);
        assert_eq!(gateway.calls()[0].endpoint_path, "/reddit-therapist");
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_panic() {
        let gateway = ScriptedGateway::new();
        gateway.push_ok(json!({"advice": "rest"}));
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let handle = handle_action(UpdateAction::InvokeGateway(submission()), tx, Arc::new(gateway));
        assert!(handle.await.is_ok());
    }
}
