//! Webhook endpoint. Accepts Bot API updates and hands them to the UpdatePort.
//!
//! POST: parse -> dispatch -> `{"ok": true}`; unparseable body -> 500 `{"error"}`.
//! OPTIONS: empty 200 for CORS preflight. Every response carries the CORS headers.

use crate::domain::{DomainError, Update};
use crate::ports::UpdatePort;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Shared handler state. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub updates: Arc<dyn UpdatePort>,
}

impl AppState {
    pub fn new(updates: Arc<dyn UpdatePort>) -> Self {
        Self { updates }
    }
}

/// Build the router: webhook at `webhook_path`, liveness at `/health`.
pub fn router(state: AppState, webhook_path: &str) -> Router {
    Router::new()
        .route(webhook_path, post(receive_update).options(preflight))
        .route("/health", get(health))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Webhook body -> Update. The only failure surfaced to the caller.
pub fn parse_update(body: &[u8]) -> Result<Update, DomainError> {
    serde_json::from_slice(body).map_err(|e| DomainError::Payload(e.to_string()))
}

/// Error response for the webhook: 500 with `{"error": ...}`.
struct WebhookError(DomainError);

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

async fn receive_update(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, WebhookError> {
    let update = parse_update(&body).map_err(|e| {
        error!(error = %e, bytes = body.len(), "rejecting webhook payload");
        WebhookError(e)
    })?;
    state.updates.handle_update(update).await;
    Ok(Json(json!({ "ok": true })))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_update_rejects_malformed_json() {
        let err = parse_update(b"{not json").unwrap_err();
        assert!(matches!(err, DomainError::Payload(_)));
    }

    #[test]
    fn parse_update_rejects_non_object() {
        assert!(parse_update(b"[1, 2]").is_err());
    }

    #[test]
    fn parse_update_accepts_empty_object() {
        let update = parse_update(b"{}").unwrap();
        assert!(update.message.is_none());
    }
}
