//! Telegram adapters. Implement MessagingGateway.

pub mod bot_api;
pub mod recording;

pub use bot_api::{BotApiGateway, DEFAULT_API_BASE};
pub use recording::RecordingGateway;
