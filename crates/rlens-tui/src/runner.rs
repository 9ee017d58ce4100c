//! Main TUI runner - entry point and event loop

use rlens_app::config::Settings;
use rlens_app::Engine;
use rlens_core::prelude::*;
use rlens_gateway::AnalysisGateway;

use super::{event, render, terminal};

/// Run the TUI against the service named in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    let mut engine = Engine::connect(settings)?;

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();

    result
}

/// Main event loop: drain messages, draw, then poll the terminal
fn run_loop<G>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: AnalysisGateway + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving TUI");
    Ok(())
}
