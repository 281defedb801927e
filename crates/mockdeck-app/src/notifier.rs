//! Channel-backed notifier
//!
//! The HTTP boundary reports failures through the injected `Notifier`
//! capability; this implementation forwards each notice into the message
//! channel so it lands in the TEA loop like any other event.

use std::sync::Arc;

use tokio::sync::mpsc;

use mockdeck_core::{Notice, Notifier};

use crate::message::Message;

/// Forwards notices into the application message channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::Sender<Message>,
}

impl ChannelNotifier {
    pub fn new(tx: mpsc::Sender<Message>) -> Self {
        Self { tx }
    }

    pub fn into_arc(self) -> Arc<dyn Notifier> {
        Arc::new(self)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // Dropping a notice when the channel is full or closed is acceptable;
        // the error itself still reaches the caller through the Result path.
        if let Err(e) = self.tx.try_send(Message::Notice(notice)) {
            tracing::debug!("Dropped notice: {}", e);
        }
    }
}
