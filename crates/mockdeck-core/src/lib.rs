//! # mockdeck-core - Core Domain Types
//!
//! Foundation crate for mockdeck. Provides domain types, error handling,
//! form validation, the notification capability, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`UserRecord`] - A user row as returned by the business API
//! - [`NewUser`] - Create/update payload (no server-assigned fields)
//! - [`StubMapping`] - An opaque WireMock stub document with typed accessors
//!
//! ### Validation (`validation`)
//! - [`validate_name()`], [`validate_birthday()`] - user form field rules
//!
//! ### Notifications (`notify`)
//! - [`Notice`], [`NoticeLevel`] - user-visible notification values
//! - [`Notifier`] - injected capability for emitting notices
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod error;
pub mod logging;
pub mod notify;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all mockdeck crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use types::{NewUser, StubMapping, UserRecord};
pub use validation::{validate_birthday, validate_name, BIRTHDAY_FORMAT};
