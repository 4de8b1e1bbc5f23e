//! Polling runtime that drives the engine.
//!
//! One task owns all per-symbol state and sweeps the symbol list every
//! poll interval, strictly sequentially per symbol: fetch, append, compute,
//! evaluate, emit. Cancellation is cooperative; a shutdown signal stops
//! scheduling new sweeps and nothing needs rollback.

use crate::config::Config;
use crate::engine::{Engine, EngineError};
use crate::services::price_source::PriceSource;
use crate::services::sink::DecisionSink;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

pub struct Monitor {
    config: Config,
    engine: Engine,
    source: Arc<dyn PriceSource>,
    sinks: Vec<Box<dyn DecisionSink>>,
}

impl Monitor {
    pub fn new(
        config: Config,
        source: Arc<dyn PriceSource>,
        sinks: Vec<Box<dyn DecisionSink>>,
    ) -> Self {
        let engine = Engine::new(&config);
        Self {
            config,
            engine,
            source,
            sinks,
        }
    }

    /// Run sweeps until the shutdown channel flips.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(Duration::from_secs(self.config.poll_interval_secs.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            symbols = ?self.config.symbols,
            interval_secs = self.config.poll_interval_secs,
            policy = ?self.config.policy,
            "monitor started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.sweep().await,
                _ = shutdown.changed() => {
                    info!("shutdown requested, monitor stopping");
                    break;
                }
            }
        }
    }

    /// One pass over every watched symbol.
    async fn sweep(&mut self) {
        let symbols = self.config.symbols.clone();
        let granularity = self.config.granularity;

        for symbol in &symbols {
            let price = match self.source.fetch(symbol).await {
                Ok(price) => price,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "price fetch failed, skipping cycle");
                    continue;
                }
            };
            debug!(symbol = %symbol, price, "fetched spot price");

            match self.engine.on_price(symbol, granularity, price, Utc::now()) {
                Ok(Some(decision)) => {
                    for sink in &self.sinks {
                        sink.emit(&decision);
                    }
                }
                Ok(None) => {}
                Err(EngineError::InsufficientData { have, need }) => {
                    debug!(symbol = %symbol, have, need, "window warming up");
                }
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "cycle skipped");
                }
            }
        }
    }
}
