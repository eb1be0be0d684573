//! Data store adapters. Implement DataStore.
//!
//! PostgREST for production, in-memory for tests.

pub mod memory_store;
pub mod postgrest;

pub use memory_store::InMemoryStore;
pub use postgrest::PostgrestStore;
