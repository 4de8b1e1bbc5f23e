//! Unit tests for the complete-or-nothing indicator engine

use pricewatch::engine::error::EngineError;
use pricewatch::indicators::engine::{IndicatorConfig, IndicatorEngine};

fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_default_min_samples_is_50() {
    // The slow SMA is the weakest link under default periods.
    assert_eq!(IndicatorConfig::default().min_samples(), 50);
}

#[test]
fn test_insufficient_data_below_threshold() {
    let engine = IndicatorEngine::new(IndicatorConfig::default());
    for len in [0, 1, 14, 35, 49] {
        let err = engine.compute(&rising(len)).unwrap_err();
        match err {
            EngineError::InsufficientData { have, need } => {
                assert_eq!(have, len);
                assert_eq!(need, 50);
            }
            other => panic!("expected InsufficientData, got {other:?}"),
        }
    }
}

#[test]
fn test_complete_snapshot_at_threshold() {
    let engine = IndicatorEngine::new(IndicatorConfig::default());
    let snapshot = engine.compute(&rising(50)).unwrap();
    assert!(snapshot.is_finite());
}

#[test]
fn test_monotonic_rise_drives_rsi_and_macd() {
    // Regression against known indicator math: a sustained rise pushes RSI
    // to its ceiling and keeps the MACD line above its lagging signal.
    let engine = IndicatorEngine::new(IndicatorConfig::default());
    let snapshot = engine.compute(&rising(60)).unwrap();
    assert_eq!(snapshot.rsi, 100.0);
    assert!(snapshot.macd_line > snapshot.macd_signal);
    assert!(snapshot.sma_fast > snapshot.sma_slow);
    assert!(snapshot.atr > 0.0);
}

#[test]
fn test_stateless_recompute() {
    let engine = IndicatorEngine::new(IndicatorConfig::default());
    let closes = rising(60);
    let a = engine.compute(&closes).unwrap();
    let b = engine.compute(&closes).unwrap();
    assert_eq!(a.rsi, b.rsi);
    assert_eq!(a.macd_line, b.macd_line);
    assert_eq!(a.bollinger_upper, b.bollinger_upper);
}

#[test]
fn test_custom_periods_shift_threshold() {
    let config = IndicatorConfig {
        sma_slow_period: 100,
        ..IndicatorConfig::default()
    };
    let engine = IndicatorEngine::new(config);
    assert!(matches!(
        engine.compute(&rising(99)),
        Err(EngineError::InsufficientData { need: 100, .. })
    ));
    assert!(engine.compute(&rising(100)).is_ok());
}
