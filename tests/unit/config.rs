//! Unit tests for configuration defaults

use chrono::Duration;
use pricewatch::config::Config;
use pricewatch::engine::window::Granularity;
use pricewatch::signals::engine::SignalPolicy;

#[test]
fn test_defaults_match_engine_expectations() {
    let config = Config::default();
    assert_eq!(config.window_capacity, 500);
    assert_eq!(config.poll_interval_secs, 10);
    assert_eq!(config.cooldown_minutes, 15);
    assert_eq!(config.account_size, 10_000.0);
    assert_eq!(config.risk_pct, 1.0);
    assert_eq!(config.policy, SignalPolicy::StrictMultiFactor);
    assert_eq!(config.granularity, Granularity::OneMinute);
    assert!(config.decision_log.is_none());
    assert!(!config.symbols.is_empty());
}

#[test]
fn test_cooldown_duration() {
    let config = Config::default();
    assert_eq!(config.cooldown(), Duration::minutes(15));
}

#[test]
fn test_default_thresholds() {
    let config = Config::default();
    assert_eq!(config.thresholds.rsi_oversold, 30.0);
    assert_eq!(config.thresholds.rsi_overbought, 70.0);
    assert_eq!(config.thresholds.stoch_low, 20.0);
    assert_eq!(config.thresholds.stoch_high, 80.0);
    assert_eq!(config.indicators.sma_fast_period, 20);
    assert_eq!(config.indicators.sma_slow_period, 50);
}

#[test]
fn test_granularity_labels() {
    assert_eq!(Granularity::OneMinute.label(), "1m");
    assert_eq!(Granularity::FiveMinutes.label(), "5m");
    assert_eq!(Granularity::FifteenMinutes.label(), "15m");
}
