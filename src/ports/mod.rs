//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the webhook adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::UpdatePort;
pub use outbound::{DataStore, MessagingGateway};
