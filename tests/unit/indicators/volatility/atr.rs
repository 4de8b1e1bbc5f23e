//! Unit tests for ATR (close-only proxy)

use pricewatch::indicators::volatility::calculate_atr;

#[test]
fn test_insufficient_data() {
    let closes: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
    assert!(calculate_atr(&closes, 14).is_none());
    assert!(calculate_atr(&closes, 0).is_none());
}

#[test]
fn test_flat_series_has_zero_range() {
    let closes = vec![100.0; 20];
    let atr = calculate_atr(&closes, 14).unwrap();
    assert_eq!(atr, 0.0);
}

#[test]
fn test_constant_step_equals_step_size() {
    // With the 2-sample high/low proxy, every true range collapses to the
    // absolute close-to-close move.
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + 2.0 * i as f64).collect();
    let atr = calculate_atr(&closes, 14).unwrap();
    assert!((atr - 2.0).abs() < 1e-12);
}

#[test]
fn test_alternating_moves() {
    let mut closes = vec![100.0];
    for i in 0..20 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 3.0 } else { last - 3.0 });
    }
    let atr = calculate_atr(&closes, 14).unwrap();
    assert!((atr - 3.0).abs() < 1e-12);
}

#[test]
fn test_uses_most_recent_ranges() {
    // Quiet history then a volatile tail: ATR reflects the tail only.
    let mut closes = vec![100.0; 30];
    for i in 0..14 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 5.0 } else { last - 5.0 });
    }
    let atr = calculate_atr(&closes, 14).unwrap();
    assert!((atr - 5.0).abs() < 1e-12);
}
