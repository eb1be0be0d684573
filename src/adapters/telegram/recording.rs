//! Recording MessagingGateway for tests. Keeps every message it is asked to send.

use crate::domain::{DomainError, OutboundMessage};
use crate::ports::MessagingGateway;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the message, then reports a delivery failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl MessagingGateway for RecordingGateway {
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        self.sent.lock().await.push(message.clone());
        if self.fail {
            return Err(DomainError::Gateway("recording gateway set to fail".into()));
        }
        Ok(())
    }
}
