//! HTTP adapter. Inbound webhook served with axum.

pub mod webhook;

pub use webhook::{AppState, router};
