//! mockdeck-tui - Terminal UI for mockdeck
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! screen layout, and the widget set for the three console screens. State
//! and transitions live in mockdeck-app; everything here only reads state
//! and draws.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
