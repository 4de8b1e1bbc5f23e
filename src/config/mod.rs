//! Engine configuration, loaded once at startup and immutable thereafter.

use crate::engine::window::Granularity;
use crate::indicators::engine::IndicatorConfig;
use crate::signals::engine::{SignalPolicy, SignalThresholds};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Product ids to watch, e.g. "BTC-USD".
    pub symbols: Vec<String>,
    /// Granularity the runtime feeds windows at.
    pub granularity: Granularity,
    /// Rolling window capacity per (symbol, granularity).
    pub window_capacity: usize,
    /// Seconds between polling sweeps.
    pub poll_interval_secs: u64,
    /// Minimum minutes between two accepted signals for one symbol.
    pub cooldown_minutes: i64,
    /// Account size the risk sizer works against, in quote currency.
    pub account_size: f64,
    /// Percentage of the account risked per trade.
    pub risk_pct: f64,
    pub policy: SignalPolicy,
    pub indicators: IndicatorConfig,
    pub thresholds: SignalThresholds,
    /// Optional JSON-lines file accepted decisions are appended to.
    pub decision_log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbols: vec![
                "BTC-USD".to_string(),
                "ETH-USD".to_string(),
                "SOL-USD".to_string(),
                "AVAX-USD".to_string(),
            ],
            granularity: Granularity::OneMinute,
            window_capacity: 500,
            poll_interval_secs: 10,
            cooldown_minutes: 15,
            account_size: 10_000.0,
            risk_pct: 1.0,
            policy: SignalPolicy::StrictMultiFactor,
            indicators: IndicatorConfig::default(),
            thresholds: SignalThresholds::default(),
            decision_log: None,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults
    /// for anything unset or unparsable. Unparsable values are logged and
    /// skipped rather than aborting startup.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var("WATCH_SYMBOLS") {
            let symbols: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !symbols.is_empty() {
                config.symbols = symbols;
            }
        }

        apply_env("WINDOW_CAPACITY", &mut config.window_capacity);
        apply_env("POLL_INTERVAL_SECONDS", &mut config.poll_interval_secs);
        apply_env("COOLDOWN_MINUTES", &mut config.cooldown_minutes);
        apply_env("ACCOUNT_SIZE", &mut config.account_size);
        apply_env("RISK_PCT", &mut config.risk_pct);
        apply_env("SIGNAL_POLICY", &mut config.policy);
        apply_env("RSI_OVERSOLD", &mut config.thresholds.rsi_oversold);
        apply_env("RSI_OVERBOUGHT", &mut config.thresholds.rsi_overbought);
        apply_env("STOCH_LOW", &mut config.thresholds.stoch_low);
        apply_env("STOCH_HIGH", &mut config.thresholds.stoch_high);
        apply_env("SMA_FAST_PERIOD", &mut config.indicators.sma_fast_period);
        apply_env("SMA_SLOW_PERIOD", &mut config.indicators.sma_slow_period);

        if let Ok(path) = env::var("DECISION_LOG") {
            if !path.is_empty() {
                config.decision_log = Some(PathBuf::from(path));
            }
        }

        config
    }

    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.cooldown_minutes)
    }
}

fn apply_env<T: FromStr>(name: &str, target: &mut T) {
    if let Ok(raw) = env::var(name) {
        match raw.parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => warn!(var = name, value = %raw, "ignoring unparsable env var"),
        }
    }
}

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
