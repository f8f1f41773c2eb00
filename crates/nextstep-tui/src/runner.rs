//! Main TUI runner - entry point and event loop
//!
//! Ties the pieces together: terminal events and task completions feed the
//! update function, spawned tasks run against the API client, and every
//! iteration redraws the view.

use tokio::sync::mpsc;
use tracing::debug;

use nextstep_api::ApiClient;
use nextstep_app::{run_task, update, AppState, Message, UpdateAction};
use nextstep_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application.
///
/// `start_country` opens the app directly on that country's detail route;
/// otherwise it starts on the home listing. Either way the first message
/// is a navigation, so data is fetched fresh on startup.
pub async fn run(api: ApiClient, start_country: Option<String>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::new();

    // Unified message channel: spawned tasks report back through it
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    let initial = match start_country {
        Some(id) => Message::NavigateCountry { id },
        None => Message::NavigateHome,
    };
    dispatch(&mut state, initial, &api, &msg_tx);

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx, &api);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    api: &ApiClient,
) -> Result<()> {
    loop {
        // Drain task completions first so the draw below sees fresh state
        while let Ok(message) = msg_rx.try_recv() {
            dispatch(state, message, api, msg_tx);
        }

        if state.should_quit {
            break;
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // 50ms poll; timeouts surface as ticks
        if let Some(message) = event::poll()? {
            dispatch(state, message, api, msg_tx);
        }
    }
    Ok(())
}

/// Feed a message through `update`, chasing follow-up messages and
/// spawning any requested tasks.
fn dispatch(
    state: &mut AppState,
    message: Message,
    api: &ApiClient,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);

        if let Some(UpdateAction::SpawnTask(task)) = result.action {
            let api = api.clone();
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                if let Some(message) = run_task(&api, task).await {
                    if tx.send(message).await.is_err() {
                        debug!("message channel closed before task completion");
                    }
                }
            });
        }

        next = result.message;
    }
}
