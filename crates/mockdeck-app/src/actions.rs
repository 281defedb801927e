//! Action executor - runs HTTP side effects on background tasks
//!
//! Each [`UpdateAction`] becomes one spawned task that performs the round
//! trip and reports back through the message channel. The update loop never
//! blocks on the network.

use tokio::sync::mpsc;

use mockdeck_api::{StubApi, UserApi};
use mockdeck_core::StubMapping;

use crate::handler::UpdateAction;
use crate::message::Message;

/// The two backend resources the console talks to.
#[derive(Debug, Clone)]
pub struct ApiHandles {
    pub users: UserApi,
    pub stubs: StubApi,
}

/// Execute an action on a background task.
///
/// Completion is reported exclusively through `msg_tx`; a closed channel
/// means the app is shutting down and the result is irrelevant.
pub fn handle_action(action: UpdateAction, api: ApiHandles, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let message = run_action(action, &api).await;
        if let Err(e) = msg_tx.send(message).await {
            tracing::debug!("Dropped action result: {}", e);
        }
    });
}

async fn run_action(action: UpdateAction, api: &ApiHandles) -> Message {
    match action {
        UpdateAction::FetchUsers => match api.users.get_all().await {
            Ok(users) => Message::UsersLoaded { users },
            Err(e) => Message::UsersLoadFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::CreateUser { user } => match api.users.create(&user).await {
            Ok(()) => Message::UserSaved { created: true },
            Err(e) => Message::UserSaveFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::UpdateUser { id, user } => match api.users.update(id, &user).await {
            Ok(()) => Message::UserSaved { created: false },
            Err(e) => Message::UserSaveFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::DeleteUser { id } => match api.users.delete(id).await {
            Ok(()) => Message::UserDeleted,
            Err(e) => Message::UserDeleteFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::FetchStubs => match api.stubs.get_all().await {
            Ok(stubs) => Message::StubsLoaded { stubs },
            Err(e) => Message::StubsLoadFailed {
                error: e.to_string(),
            },
        },

        UpdateAction::CreateStub { doc } => {
            match api.stubs.create(&StubMapping::new(doc)).await {
                Ok(()) => Message::StubSaved { created: true },
                Err(e) => Message::StubSaveFailed {
                    error: e.to_string(),
                },
            }
        }

        UpdateAction::UpdateStub { id, doc } => {
            match api.stubs.update(&id, &StubMapping::new(doc)).await {
                Ok(()) => Message::StubSaved { created: false },
                Err(e) => Message::StubSaveFailed {
                    error: e.to_string(),
                },
            }
        }

        UpdateAction::DeleteStub { id } => match api.stubs.delete(&id).await {
            Ok(()) => Message::StubDeleted,
            Err(e) => Message::StubDeleteFailed {
                error: e.to_string(),
            },
        },
    }
}
