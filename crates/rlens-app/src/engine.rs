//! Engine - shared orchestration for the TUI and the one-shot query runner
//!
//! The Engine owns the application state, the message channel and the
//! gateway. Frontends feed it input messages and drain the channel; gateway
//! completions arrive on the same channel.

use std::sync::Arc;
use std::time::Duration;

use rlens_core::prelude::*;
use rlens_gateway::{AnalysisGateway, HttpGateway};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Reddit Lens.
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    gateway: Arc<G>,

    /// In-flight gateway tasks
    request_tasks: Vec<JoinHandle<()>>,
}

impl Engine<HttpGateway> {
    /// Build an engine talking to the service named in `settings.api`.
    pub fn connect(settings: Settings) -> Result<Self> {
        let gateway = HttpGateway::new(&settings.api.gateway_config())?;
        info!("Using analysis service at {}", gateway.base_url());
        Ok(Self::new(settings, gateway))
    }
}

impl<G> Engine<G>
where
    G: AnalysisGateway + Send + Sync + 'static,
{
    /// Create an engine around `gateway`.
    ///
    /// Spawns the signal handler, so this must run inside a tokio runtime.
    pub fn new(settings: Settings, gateway: G) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            gateway: Arc::new(gateway),
            request_tasks: Vec::new(),
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.gateway,
            &mut self.request_tasks,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. The TUI runner calls this
    /// before every frame.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` if the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Process messages until the mounted panel leaves `Submitting` or the
    /// app is asked to quit.
    pub async fn wait_for_completion(&mut self) {
        while self.is_submitting() && !self.should_quit() {
            if !self.process_next().await {
                warn!("Message channel closed while waiting for a reply");
                break;
            }
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_submitting(&self) -> bool {
        self.state
            .view
            .mounted()
            .is_some_and(|machine| machine.is_submitting())
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Number of gateway calls still running.
    pub fn in_flight(&self) -> usize {
        self.request_tasks
            .iter()
            .filter(|task| !task.is_finished())
            .count()
    }

    /// Abandon outstanding gateway calls. Their replies are never shown.
    pub async fn shutdown(&mut self) {
        for task in self.request_tasks.drain(..) {
            if task.is_finished() {
                continue;
            }
            task.abort();
            match tokio::time::timeout(Duration::from_secs(2), task).await {
                Ok(Err(e)) if e.is_cancelled() => debug!("Aborted in-flight request"),
                Ok(Err(e)) => warn!("Request task panicked: {}", e),
                Ok(Ok(())) => {}
                Err(_) => warn!("Request task did not stop in time"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ActiveView;
    use rlens_gateway::test_utils::ScriptedGateway;

    fn engine() -> Engine<ScriptedGateway> {
        Engine::new(Settings::default(), ScriptedGateway::new())
    }

    #[tokio::test]
    async fn test_engine_new_creates_valid_state() {
        let engine = engine();
        assert_eq!(engine.state.view.active(), ActiveView::Landing);
        assert!(!engine.should_quit());
        assert_eq!(engine.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = engine();
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = engine();
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_engine_drains_sent_messages() {
        let mut engine = engine();
        let tx = engine.msg_sender();
        tx.send(Message::NextPanel).await.unwrap();
        tx.send(Message::ToggleDisplayMode).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(engine.state.view.mounted().is_some());
    }

    #[tokio::test]
    async fn test_wait_for_completion_returns_when_idle() {
        let mut engine = engine();
        engine.wait_for_completion().await;
        assert!(!engine.is_submitting());
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://example.com".into();
        assert!(Engine::connect(settings).is_err());
    }
}
