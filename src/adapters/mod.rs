//! Infrastructure adapters. Implement ports.
//!
//! Webhook server, Bot API gateway, data store. Map errors to DomainError.

pub mod http;
pub mod store;
pub mod telegram;
