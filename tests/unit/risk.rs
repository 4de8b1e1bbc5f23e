//! Unit tests for risk sizing

use chrono::Utc;
use pricewatch::engine::error::EngineError;
use pricewatch::models::decision::Signal;
use pricewatch::models::indicators::IndicatorSnapshot;
use pricewatch::risk::RiskSizer;

fn snapshot_with_atr(atr: f64) -> IndicatorSnapshot {
    IndicatorSnapshot {
        rsi: 25.0,
        macd_line: 1.0,
        macd_signal: 0.5,
        sma_fast: 99.0,
        sma_slow: 95.0,
        atr,
        bollinger_upper: 110.0,
        bollinger_lower: 90.0,
        stoch_k: 15.0,
        stoch_d: 18.0,
    }
}

#[test]
fn test_long_exact_levels() {
    let sizer = RiskSizer::new(10_000.0, 1.0);
    let decision = sizer
        .size("BTC-USD", Signal::Long, 100.0, &snapshot_with_atr(2.0), Utc::now())
        .unwrap();

    assert_eq!(decision.stop_loss, 96.0);
    assert_eq!(decision.take_profit, 106.0);
    assert_eq!(decision.risk_reward, 1.5);
    // 1% of 10k = 100 risked over a 4.0 stop distance.
    assert_eq!(decision.position_size, 25.0);
    assert_eq!(decision.signal, Signal::Long);
    assert_eq!(decision.symbol, "BTC-USD");
}

#[test]
fn test_short_exact_levels() {
    let sizer = RiskSizer::new(10_000.0, 1.0);
    let decision = sizer
        .size("ETH-USD", Signal::Short, 100.0, &snapshot_with_atr(2.0), Utc::now())
        .unwrap();

    assert_eq!(decision.stop_loss, 104.0);
    assert_eq!(decision.take_profit, 94.0);
    assert_eq!(decision.risk_reward, 1.5);
    assert_eq!(decision.position_size, 25.0);
}

#[test]
fn test_risk_reward_fixed_by_construction() {
    let sizer = RiskSizer::new(50_000.0, 2.5);
    for (entry, atr) in [(45_000.0, 312.5), (0.37, 0.004), (1_900.0, 55.0)] {
        for signal in [Signal::Long, Signal::Short] {
            let decision = sizer
                .size("X-USD", signal, entry, &snapshot_with_atr(atr), Utc::now())
                .unwrap();
            assert!((decision.risk_reward - 1.5).abs() < 1e-9);
        }
    }
}

#[test]
fn test_position_size_scales_with_risk_pct() {
    let low = RiskSizer::new(10_000.0, 1.0);
    let high = RiskSizer::new(10_000.0, 2.0);
    let snapshot = snapshot_with_atr(2.0);
    let a = low
        .size("BTC-USD", Signal::Long, 100.0, &snapshot, Utc::now())
        .unwrap();
    let b = high
        .size("BTC-USD", Signal::Long, 100.0, &snapshot, Utc::now())
        .unwrap();
    assert_eq!(b.position_size, 2.0 * a.position_size);
}

#[test]
fn test_rejects_non_directional_signal() {
    let sizer = RiskSizer::new(10_000.0, 1.0);
    let err = sizer
        .size("BTC-USD", Signal::None, 100.0, &snapshot_with_atr(2.0), Utc::now())
        .unwrap_err();
    assert!(matches!(err, EngineError::Rejected { .. }));
}

#[test]
fn test_rejects_non_positive_atr() {
    let sizer = RiskSizer::new(10_000.0, 1.0);
    for atr in [0.0, -1.5] {
        let err = sizer
            .size("BTC-USD", Signal::Long, 100.0, &snapshot_with_atr(atr), Utc::now())
            .unwrap_err();
        assert!(matches!(err, EngineError::Rejected { .. }));
    }
}
