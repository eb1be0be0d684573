//! tg-postboard: Telegram webhook bot for a posts/profiles platform, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
