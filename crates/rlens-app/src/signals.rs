//! SIGINT/SIGTERM (Ctrl+C on Windows) become `Message::Quit`
//!
//! Quitting abandons any in-flight analysis; the engine aborts those tasks
//! on shutdown and their replies are never shown.

use std::fmt;
use std::future::Future;

use rlens_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Which OS signal asked the app to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Listen for OS signals and post `Message::Quit` on the first one.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(wait_for_signal(), tx));
}

/// Wait for `signal`, then ask the engine to quit through `tx`.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    let signal = match signal.await {
        Ok(signal) => signal,
        Err(e) => {
            // Ctrl+C still works through the key handler
            warn!("Signal handling unavailable: {}", e);
            return;
        }
    };

    info!("{} received, quitting", signal);
    if tx.send(Message::Quit).await.is_err() {
        debug!("{} arrived after the engine stopped", signal);
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_before_any_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_signal_posts_quit() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        forward_shutdown(async { Ok(ShutdownSignal::Terminate) }, tx).await;

        assert!(matches!(rx.try_recv(), Ok(Message::Quit)));
    }

    #[tokio::test]
    async fn test_listener_failure_posts_nothing() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        forward_shutdown(async { Err(Error::terminal("no signals here")) }, tx).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_signal_after_engine_stopped_is_ignored() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);
        forward_shutdown(async { Ok(ShutdownSignal::Interrupt) }, tx).await;
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "SIGTERM");
    }
}
