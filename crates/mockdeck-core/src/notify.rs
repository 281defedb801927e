//! User-visible notifications
//!
//! The HTTP boundary and the update handlers both emit notices through the
//! [`Notifier`] capability instead of an ambient global, so tests can
//! assert on emitted notifications without a rendering surface.

use chrono::{DateTime, Utc};

/// Severity of a notice, mapped to toast styling in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A single user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }
}

/// Capability for emitting notices from lower layers.
///
/// Implementations must be cheap and non-blocking; a dropped notice is
/// preferable to a stalled request task.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn error(&self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::error(text));
    }

    fn success(&self, text: impl Into<String>)
    where
        Self: Sized,
    {
        self.notify(Notice::success(text));
    }
}

/// Test double that records every emitted notice.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: std::sync::Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut self.notices.lock().expect("notifier lock"))
    }

    pub fn texts(&self) -> Vec<String> {
        self.notices
            .lock()
            .expect("notifier lock")
            .iter()
            .map(|n| n.text.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("notifier lock").push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_captures_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::error("first"));
        notifier.notify(Notice::success("second"));

        let notices = notifier.take();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].text, "first");
        assert_eq!(notices[1].level, NoticeLevel::Success);
    }

    #[test]
    fn test_take_drains() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::info("once"));
        assert_eq!(notifier.take().len(), 1);
        assert!(notifier.take().is_empty());
    }
}
