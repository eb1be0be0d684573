//! Application use cases. Orchestrate domain logic via ports.

pub mod dispatcher;
pub mod replies;

pub use dispatcher::CommandDispatcher;
