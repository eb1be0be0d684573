//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, OutboundMessage, Post, Profile};

/// Read-only view of the posts/profiles store.
#[async_trait::async_trait]
pub trait DataStore: Send + Sync {
    /// Most recently created published posts, newest first, with author username joined.
    ///
    /// Returns at most `limit` posts.
    async fn recent_published_posts(&self, limit: usize) -> Result<Vec<Post>, DomainError>;

    /// Profile linked to the given Telegram user id, if any.
    async fn find_profile_by_telegram_id(
        &self,
        telegram_id: &str,
    ) -> Result<Option<Profile>, DomainError>;

    /// All posts owned by a profile, any status. Used for like aggregation.
    async fn posts_by_author(&self, profile_id: &str) -> Result<Vec<Post>, DomainError>;
}

/// Chat messaging gateway. Delivers text to a chat.
#[async_trait::async_trait]
pub trait MessagingGateway: Send + Sync {
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), DomainError>;
}
