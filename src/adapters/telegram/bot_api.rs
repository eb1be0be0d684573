//! Telegram Bot API gateway. Implements MessagingGateway via `sendMessage`.

use crate::domain::{DomainError, OutboundMessage};
use crate::ports::MessagingGateway;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Sends replies through `POST {api_base}/bot{token}/sendMessage`.
pub struct BotApiGateway {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl BotApiGateway {
    /// # Arguments
    /// * `api_base` - Bot API root, usually `DEFAULT_API_BASE`
    /// * `token` - Bot token from BotFather
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_base.trim_end_matches('/'),
            self.token,
            method
        )
    }
}

/// Envelope of every Bot API response.
#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[async_trait::async_trait]
impl MessagingGateway for BotApiGateway {
    async fn send_message(&self, message: &OutboundMessage) -> Result<(), DomainError> {
        // The token is part of the URL; strip it from transport errors.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(message)
            .send()
            .await
            .map_err(|e| {
                DomainError::Gateway(format!("HTTP request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let body: ApiResponse = response.json().await.map_err(|e| {
            DomainError::Gateway(format!(
                "Failed to parse sendMessage response ({}): {}",
                status,
                e.without_url()
            ))
        })?;

        if !body.ok {
            let description = body.description.unwrap_or_else(|| "unknown".to_string());
            warn!(
                chat_id = message.chat_id,
                status = %status,
                description = %description,
                "sendMessage rejected"
            );
            return Err(DomainError::Gateway(format!(
                "sendMessage rejected ({}): {}",
                status, description
            )));
        }

        debug!(chat_id = message.chat_id, "reply delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn method_url_embeds_token() {
        let gw = BotApiGateway::new("https://api.telegram.org/", "123:abc");
        assert_eq!(
            gw.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[tokio::test]
    async fn posts_html_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(serde_json::json!({
                "chat_id": 42,
                "text": "<b>hi</b>",
                "parse_mode": "HTML"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"ok": true, "result": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let gw = BotApiGateway::new(server.uri(), "123:abc");
        gw.send_message(&OutboundMessage::html(42, "<b>hi</b>"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejected_message_is_gateway_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let gw = BotApiGateway::new(server.uri(), "123:abc");
        let err = gw
            .send_message(&OutboundMessage::html(1, "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Gateway(ref m) if m.contains("chat not found")));
    }
}
