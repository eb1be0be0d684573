//! Inbound port. The webhook adapter calls into the application.

use crate::domain::{Command, Update};

/// Handles one inbound update end to end.
#[async_trait::async_trait]
pub trait UpdatePort: Send + Sync {
    /// Route and answer the update. Returns the command that was handled, or
    /// `None` when the update carried no text. Never fails: store and delivery
    /// errors are absorbed by the handler.
    async fn handle_update(&self, update: Update) -> Option<Command>;
}
