//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers, mapping keys to messages per screen
//! - `users`: User table, form, and delete handlers
//! - `stubs`: Stub list and editor handlers

pub(crate) mod keys;
pub(crate) mod stubs;
pub(crate) mod update;
pub(crate) mod users;


use mockdeck_core::NewUser;
use serde_json::Value;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the full user collection
    FetchUsers,

    /// Create a user record
    CreateUser { user: NewUser },

    /// Replace the user record with this id
    UpdateUser { id: i64, user: NewUser },

    /// Delete the user record with this id
    DeleteUser { id: i64 },

    /// Fetch all stub mappings
    FetchStubs,

    /// Create a stub mapping from a parsed document
    CreateStub { doc: Value },

    /// Replace the stub mapping with this id
    UpdateStub { id: String, doc: Value },

    /// Delete the stub mapping with this id
    DeleteStub { id: String },
}

/// Result of an update: optional follow-up message and/or action
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
