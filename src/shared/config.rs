//! Application configuration. Bot token, store credentials, listener.

use serde::Deserialize;

/// Default listen address for the webhook server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default path Telegram posts updates to.
pub const DEFAULT_WEBHOOK_PATH: &str = "/";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot token from BotFather. Read from TG_POSTBOARD_BOT_TOKEN or TELEGRAM_BOT_TOKEN.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Store project URL. Read from TG_POSTBOARD_STORE_URL or SUPABASE_URL.
    #[serde(default)]
    pub store_url: Option<String>,

    /// Store service credential. Read from TG_POSTBOARD_STORE_KEY or SUPABASE_SERVICE_ROLE_KEY.
    #[serde(default)]
    pub store_key: Option<String>,

    /// Listen address (default 0.0.0.0:8080). Read from TG_POSTBOARD_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// Webhook route (default "/"). Read from TG_POSTBOARD_WEBHOOK_PATH.
    #[serde(default)]
    pub webhook_path: Option<String>,

    /// Bot API root (default https://api.telegram.org). Read from TG_POSTBOARD_TELEGRAM_API_BASE.
    #[serde(default)]
    pub telegram_api_base: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TG_POSTBOARD"));
        if let Ok(path) = std::env::var("TG_POSTBOARD_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Bot token from config or TELEGRAM_BOT_TOKEN env. Empty when unset; sends will fail downstream.
    pub fn bot_token(&self) -> String {
        self.bot_token
            .clone()
            .or_else(|| std::env::var("TELEGRAM_BOT_TOKEN").ok())
            .unwrap_or_default()
    }

    /// Store URL from config or SUPABASE_URL env.
    pub fn store_url(&self) -> String {
        self.store_url
            .clone()
            .or_else(|| std::env::var("SUPABASE_URL").ok())
            .unwrap_or_default()
    }

    /// Store key from config or SUPABASE_SERVICE_ROLE_KEY env.
    pub fn store_key(&self) -> String {
        self.store_key
            .clone()
            .or_else(|| std::env::var("SUPABASE_SERVICE_ROLE_KEY").ok())
            .unwrap_or_default()
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    /// Webhook path, always starting with '/'.
    pub fn webhook_path_or_default(&self) -> String {
        match self.webhook_path.as_deref() {
            None | Some("") => DEFAULT_WEBHOOK_PATH.to_string(),
            Some(p) if p.starts_with('/') => p.to_string(),
            Some(p) => format!("/{}", p),
        }
    }

    pub fn telegram_api_base_or_default(&self) -> String {
        self.telegram_api_base
            .clone()
            .unwrap_or_else(|| crate::adapters::telegram::DEFAULT_API_BASE.to_string())
    }

    /// Names of the deployment variables that resolved to nothing.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.bot_token().is_empty() {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        if self.store_url().is_empty() {
            missing.push("SUPABASE_URL");
        }
        if self.store_key().is_empty() {
            missing.push("SUPABASE_SERVICE_ROLE_KEY");
        }
        missing
    }
}
