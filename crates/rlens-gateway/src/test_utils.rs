//! Test utilities for gateway consumers
//!
//! [`ScriptedGateway`] answers invocations from a queue of prepared replies
//! and records every call, so tests can count outbound requests and hold a
//! reply back until they choose to release it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::oneshot;

use crate::error::GatewayError;
use crate::gateway::{AnalysisGateway, RequestInputs};
use crate::RawPayload;

/// Outcome type returned by a gateway invocation.
pub type Reply = Result<RawPayload, GatewayError>;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub endpoint_path: String,
    pub inputs: RequestInputs,
}

enum Scripted {
    Ready(Reply),
    Held(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Scripted>,
    calls: Vec<RecordedCall>,
}

/// Gateway double with queued replies. Clones share the same script.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a successful reply.
    pub fn push_ok(&self, payload: RawPayload) {
        self.script().replies.push_back(Scripted::Ready(Ok(payload)));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: GatewayError) {
        self.script().replies.push_back(Scripted::Ready(Err(error)));
    }

    /// Queue a reply that stays pending until the returned sender fires.
    pub fn push_held(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script().replies.push_back(Scripted::Held(rx));
        tx
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script().calls.len()
    }
}

impl AnalysisGateway for ScriptedGateway {
    async fn invoke(&self, endpoint_path: &str, inputs: &RequestInputs) -> Reply {
        let next = {
            let mut script = self.script();
            script.calls.push(RecordedCall {
                endpoint_path: endpoint_path.to_string(),
                inputs: inputs.clone(),
            });
            script.replies.pop_front()
        };

        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Held(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(GatewayError::network("held reply dropped"))),
            None => Err(GatewayError::unexpected(0, "no scripted reply left")),
        }
    }
}
