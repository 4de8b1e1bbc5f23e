//! Pricewatch monitor
//!
//! Polls spot prices for the configured symbols and logs risk-sized trade
//! decisions when the confirmation rules fire.

use dotenvy::dotenv;
use pricewatch::config::{self, Config};
use pricewatch::core::runtime::Monitor;
use pricewatch::logging;
use pricewatch::services::price_source::CoinbasePriceSource;
use pricewatch::services::sink::{DecisionSink, FileSink, TracingSink};
use std::sync::Arc;
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let env = config::get_environment();
    info!("Starting Pricewatch monitor");
    info!(environment = %env, symbols = ?config.symbols, "Configuration loaded");

    if config.symbols.is_empty() {
        return Err("WATCH_SYMBOLS resolved to an empty symbol list".into());
    }

    let source = Arc::new(CoinbasePriceSource::new());
    let mut sinks: Vec<Box<dyn DecisionSink>> = vec![Box::new(TracingSink)];
    if let Some(path) = &config.decision_log {
        sinks.push(Box::new(FileSink::new(path.clone())));
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let monitor = Monitor::new(config, source, sinks);
    let handle = tokio::spawn(monitor.run(shutdown_rx));

    signal::ctrl_c().await?;
    info!("Shutting down monitor...");
    let _ = shutdown_tx.send(true);
    let _ = handle.await;
    info!("Monitor stopped");

    Ok(())
}
