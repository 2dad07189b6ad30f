//! Weather bot
//!
//! Main entry point: long-polls Telegram and answers weather queries.

use std::sync::Arc;

use anyhow::Context;
use application::{WeatherDispatcher, ports::CachePort};
use infrastructure::{
    AppConfig, FreshnessCache, InMemoryConversationStateStore, TelegramMessenger, WeatherAdapter,
    init_telemetry,
};
use integration_telegram::TelegramClient;
use teloxide::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    init_telemetry(&config.telemetry)?;

    info!("🌤 weather-bot v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    info!(
        base_url = %config.weather.base_url,
        units = %config.weather.units,
        language = %config.weather.language,
        timeout_secs = config.weather.timeout_secs,
        "Configuration loaded"
    );

    let token = config
        .telegram
        .bot_token_str()
        .context("Telegram bot token is not configured")?;
    let telegram = TelegramClient::new(token);

    let weather = WeatherAdapter::with_config(config.weather.to_client_config())
        .context("Failed to initialize weather client")?;

    let cache = Arc::new(FreshnessCache::new());
    let dispatcher = Arc::new(WeatherDispatcher::new(
        Arc::new(weather),
        Arc::new(TelegramMessenger::new(telegram.clone())),
        Arc::clone(&cache) as Arc<dyn CachePort>,
        Arc::new(InMemoryConversationStateStore::new()),
    ));

    info!("🚀 Listening for updates");

    Dispatcher::builder(telegram.bot(), presentation_bot::schema())
        .dependencies(dptree::deps![dispatcher])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    let stats = cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        entries = stats.entries,
        hit_rate = stats.hit_rate(),
        "Shutting down"
    );

    Ok(())
}
