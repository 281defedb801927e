//! # mockdeck-api - HTTP client layer
//!
//! Thin, base-configured clients for the two backends mockdeck talks to:
//! the business API (user records) and the WireMock-style admin API
//! (stub mappings).
//!
//! Every failure crossing the HTTP boundary is surfaced exactly once
//! through the injected [`mockdeck_core::Notifier`] and returned to the
//! caller, which may layer a context-specific notice of its own.

pub mod client;
pub mod stubs;
pub mod users;

pub use client::ApiClient;
pub use stubs::StubApi;
pub use users::UserApi;
