//! User form validation rules
//!
//! The birthday contract is the strict string form: the value must match
//! `YYYY-MM-DD` exactly AND name a real calendar date. A date-picker style
//! timestamp ("2000-01-01T00:00:00Z") is rejected.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Error, Result};

/// The accepted birthday pattern, also shown in field-level error messages.
pub const BIRTHDAY_FORMAT: &str = "YYYY-MM-DD";

fn birthday_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"))
}

/// Validate the user name field: non-empty after trimming.
///
/// Returns the trimmed name on success.
pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("name", "name is required"));
    }
    Ok(trimmed.to_string())
}

/// Validate the birthday field: required, strict pattern, real calendar date.
pub fn validate_birthday(birthday: &str) -> Result<String> {
    let trimmed = birthday.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("birthday", "birthday is required"));
    }
    if !birthday_regex().is_match(trimmed) {
        return Err(Error::validation(
            "birthday",
            format!("must match {BIRTHDAY_FORMAT}"),
        ));
    }
    if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
        return Err(Error::validation("birthday", "not a valid calendar date"));
    }
    Ok(trimmed.to_string())
}
