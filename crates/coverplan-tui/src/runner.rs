//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use coverplan_app::config::Settings;
use coverplan_app::message::Message;
use coverplan_app::process;
use coverplan_app::{AppState, ConfiguredSink};
use coverplan_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the calculator until the user quits.
///
/// Lead submissions run as tokio tasks and report back over the message
/// channel, so this must be called from within a multi-threaded runtime.
pub async fn run(settings: Settings, sink: Arc<ConfiguredSink>) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings);
    info!(
        monthly_amount = state.calculator.monthly_amount(),
        years = state.calculator.years(),
        sink = %sink.describe(),
        "Starting calculator"
    );

    let mut term = ratatui::init();

    // Sink tasks report back here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &sink);

    ratatui::restore();

    if let Err(e) = &result {
        error!("Event loop stopped: {}", e);
    } else {
        info!("Calculator closed");
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    sink: &Arc<ConfiguredSink>,
) -> Result<()> {
    while !state.should_quit() {
        // Sink results (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, sink);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Drawing frame")?;

        if let Some(message) = event::poll().context("Reading terminal input")? {
            process::process_message(state, message, &msg_tx, sink);
        }
    }

    Ok(())
}
