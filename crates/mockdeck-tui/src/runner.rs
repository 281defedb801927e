//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use mockdeck_api::{ApiClient, StubApi, UserApi};
use mockdeck_app::config::Settings;
use mockdeck_app::message::Message;
use mockdeck_app::process::process_message;
use mockdeck_app::state::{AppState, Screen};
use mockdeck_app::{ApiHandles, ChannelNotifier};
use mockdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application against the configured backends
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // The HTTP boundary reports failures through this notifier; notices
    // arrive in the loop as ordinary messages
    let notifier = ChannelNotifier::new(msg_tx.clone()).into_arc();
    let timeout = settings.backend.timeout();
    let api = ApiHandles {
        users: UserApi::new(ApiClient::new(
            &settings.backend.user_api_url,
            timeout,
            notifier.clone(),
        )?),
        stubs: StubApi::new(ApiClient::new(
            &settings.backend.admin_api_url,
            timeout,
            notifier,
        )?),
    };
    info!(
        "Connecting to user API {} and admin API {}",
        settings.backend.user_api_url, settings.backend.admin_api_url
    );

    let mut term = ratatui::init();
    let mut state = AppState::new(settings.ui.page_size);

    // Land on the dashboard; collections are fetched when their screens open
    state.screen = Screen::Dashboard;

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &ApiHandles,
) -> Result<()> {
    while !state.quitting {
        // Process completed round trips and boundary notices
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, api, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, api, &msg_tx);
        }
    }

    Ok(())
}
