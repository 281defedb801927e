//! Message processing loop glue
//!
//! Drives a message and all of its follow-ups through the TEA update
//! function, dispatching any resulting actions to the executor.

use tokio::sync::mpsc;

use crate::actions::{handle_action, ApiHandles};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    api: &ApiHandles,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
