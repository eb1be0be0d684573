//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the command grammar and errors live here. Dependencies flow inward.

pub mod command;
pub mod entities;
pub mod errors;

pub use command::Command;
pub use entities::{
    ChatRef, IncomingMessage, OutboundMessage, ParseMode, Post, PostStatus, Profile, Sender,
    Update,
};
pub use errors::DomainError;
