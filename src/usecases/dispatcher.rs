//! Command dispatcher: parse -> route -> (query store) -> format -> send.
//!
//! - One outbound message per update that carries text, none otherwise
//! - Store failures become the apology reply; delivery failures are only logged
//! - No state survives between updates

use crate::domain::{Command, DomainError, IncomingMessage, OutboundMessage, Update};
use crate::ports::{DataStore, MessagingGateway, UpdatePort};
use crate::usecases::replies;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Number of posts listed by `/posts`.
pub const POSTS_LIMIT: usize = 5;

/// Routes bot commands to their handlers.
pub struct CommandDispatcher {
    store: Arc<dyn DataStore>,
    gateway: Arc<dyn MessagingGateway>,
}

impl CommandDispatcher {
    pub fn new(store: Arc<dyn DataStore>, gateway: Arc<dyn MessagingGateway>) -> Self {
        Self { store, gateway }
    }

    /// Build the reply text for a parsed command.
    pub async fn reply_for(&self, command: Command, message: &IncomingMessage) -> String {
        match command {
            // Sender username / first name are deliberately not used.
            Command::Start => replies::welcome(message.chat.id),
            Command::Posts => self.posts_reply().await.unwrap_or_else(|e| {
                warn!(chat_id = message.chat.id, error = %e, "failed to load posts");
                replies::APOLOGY.to_string()
            }),
            Command::MyProfile => {
                let telegram_id = message.sender_id().to_string();
                self.profile_reply(&telegram_id).await.unwrap_or_else(|e| {
                    warn!(
                        chat_id = message.chat.id,
                        telegram_id = %telegram_id,
                        error = %e,
                        "failed to load profile"
                    );
                    replies::APOLOGY.to_string()
                })
            }
            Command::Help => replies::help(),
            Command::Unknown => replies::UNKNOWN_COMMAND.to_string(),
        }
    }

    async fn posts_reply(&self) -> Result<String, DomainError> {
        let mut posts = self.store.recent_published_posts(POSTS_LIMIT).await?;
        if posts.is_empty() {
            return Ok(replies::NO_POSTS.to_string());
        }
        posts.truncate(POSTS_LIMIT);
        Ok(replies::post_list(&posts))
    }

    async fn profile_reply(&self, telegram_id: &str) -> Result<String, DomainError> {
        let Some(profile) = self.store.find_profile_by_telegram_id(telegram_id).await? else {
            return Ok(replies::not_linked(telegram_id));
        };
        let posts = self.store.posts_by_author(&profile.id).await?;
        let total_likes: i64 = posts.iter().map(|p| p.likes_count).sum();
        Ok(replies::profile_summary(&profile, posts.len(), total_likes))
    }

    async fn deliver(&self, message: OutboundMessage) {
        if let Err(e) = self.gateway.send_message(&message).await {
            warn!(chat_id = message.chat_id, error = %e, "failed to deliver reply");
        }
    }
}

#[async_trait::async_trait]
impl UpdatePort for CommandDispatcher {
    async fn handle_update(&self, update: Update) -> Option<Command> {
        let Some(message) = update.message else {
            debug!(update_id = ?update.update_id, "update without message, ignoring");
            return None;
        };
        let Some(text) = message.text.as_deref() else {
            debug!(chat_id = message.chat.id, "message without text, ignoring");
            return None;
        };

        let command = Command::parse(text);
        info!(
            chat_id = message.chat.id,
            chat_type = message.chat.chat_type.as_deref().unwrap_or("unknown"),
            %command,
            "dispatching command"
        );

        let reply = self.reply_for(command, &message).await;
        self.deliver(OutboundMessage::html(message.chat.id, reply)).await;
        Some(command)
    }
}
