//! Wiring & DI. Entry point: bootstrap adapters, inject into the dispatcher, serve the webhook.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tg_postboard::adapters::http::{AppState, router};
use tg_postboard::adapters::store::PostgrestStore;
use tg_postboard::adapters::telegram::BotApiGateway;
use tg_postboard::ports::{DataStore, MessagingGateway, UpdatePort};
use tg_postboard::shared::config::AppConfig;
use tg_postboard::usecases::CommandDispatcher;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;
    // Not fatal: requests that need a missing credential fail downstream.
    for name in cfg.missing_credentials() {
        warn!(variable = name, "{} is not set", name);
    }

    // --- Outbound adapters (built once, shared by every request) ---
    let store: Arc<dyn DataStore> =
        Arc::new(PostgrestStore::new(cfg.store_url(), cfg.store_key()));
    let gateway: Arc<dyn MessagingGateway> = Arc::new(BotApiGateway::new(
        cfg.telegram_api_base_or_default(),
        cfg.bot_token(),
    ));

    // --- Dispatcher ---
    let dispatcher: Arc<dyn UpdatePort> = Arc::new(CommandDispatcher::new(store, gateway));

    // --- Webhook server ---
    let webhook_path = cfg.webhook_path_or_default();
    let app = router(AppState::new(dispatcher), &webhook_path);

    let address = cfg.bind_addr_or_default();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", address, e))?;
    info!(%address, path = %webhook_path, "webhook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("http server error: {}", e))?;

    info!("webhook server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
