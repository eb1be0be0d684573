//! Domain entities. Pure data structures for the core business.
//!
//! Store rows and Bot API payloads are mapped into these by adapters; the
//! inbound `Update` shape is deserialized directly from the webhook body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account on the platform, optionally linked to a Telegram user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    /// Telegram user id as a string. At most one profile per id.
    pub telegram_id: Option<String>,
    pub username: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// Authored content. `author_username` is only filled when the query joins profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub likes_count: i64,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub author_id: String,
    pub author_username: Option<String>,
}

/// One inbound chat event delivered to the webhook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Update {
    #[serde(default)]
    pub update_id: Option<i64>,
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

impl Update {
    /// Message text, if the update carries a message with text.
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.text.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub chat: ChatRef,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub from: Option<Sender>,
}

impl IncomingMessage {
    /// Telegram id used for profile lookup: the sender, or the chat for anonymous posts.
    pub fn sender_id(&self) -> i64 {
        self.from.as_ref().map_or(self.chat.id, |f| f.id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRef {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub chat_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sender {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

/// Formatting applied by the gateway to outbound text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
}

/// Reply to deliver to a chat. Fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub chat_id: i64,
    pub text: String,
    pub parse_mode: ParseMode,
}

impl OutboundMessage {
    pub fn html(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: ParseMode::Html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_message_has_no_text() {
        let update: Update = serde_json::from_str(r#"{"update_id": 7}"#).unwrap();
        assert!(update.message.is_none());
        assert_eq!(update.text(), None);
    }

    #[test]
    fn update_parses_telegram_message_shape() {
        let raw = r#"{
            "update_id": 1,
            "message": {
                "message_id": 10,
                "chat": {"id": 42, "type": "private"},
                "from": {"id": 99, "is_bot": false, "username": "alice", "first_name": "Alice"},
                "text": "/posts"
            }
        }"#;
        let update: Update = serde_json::from_str(raw).unwrap();
        let msg = update.message.as_ref().unwrap();
        assert_eq!(msg.chat.id, 42);
        assert_eq!(msg.chat.chat_type.as_deref(), Some("private"));
        assert_eq!(msg.sender_id(), 99);
        assert_eq!(update.text(), Some("/posts"));
    }

    #[test]
    fn sender_id_falls_back_to_chat() {
        let update: Update =
            serde_json::from_str(r#"{"message": {"chat": {"id": -5}, "text": "hi"}}"#).unwrap();
        assert_eq!(update.message.unwrap().sender_id(), -5);
    }

    #[test]
    fn outbound_message_serializes_html_parse_mode() {
        let json = serde_json::to_value(OutboundMessage::html(3, "<b>hi</b>")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"chat_id": 3, "text": "<b>hi</b>", "parse_mode": "HTML"})
        );
    }
}
