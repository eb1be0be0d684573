//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Data store error: {0}")]
    Store(String),

    #[error("Messaging gateway error: {0}")]
    Gateway(String),

    /// Inbound webhook body could not be parsed as an update.
    #[error("Invalid update payload: {0}")]
    Payload(String),
}
