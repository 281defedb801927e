//! mockdeck-app - Application state and orchestration for mockdeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: an [`AppState`] model, a [`Message`] enum, a pure
//! [`handler::update`] function, and an action executor that runs HTTP
//! side effects on background tasks.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifier;
pub mod process;
pub mod state;
pub mod view_model;

// Re-export primary types
pub use actions::ApiHandles;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notifier::ChannelNotifier;
pub use state::{AppState, Screen};
