//! Unit tests for RSI

use pricewatch::indicators::momentum::calculate_rsi;

fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

fn falling(count: usize) -> Vec<f64> {
    (0..count).map(|i| 200.0 - i as f64).collect()
}

#[test]
fn test_insufficient_data() {
    assert!(calculate_rsi(&rising(14), 14).is_none());
    assert!(calculate_rsi(&rising(20), 0).is_none());
}

#[test]
fn test_all_gains_is_100() {
    assert_eq!(calculate_rsi(&rising(20), 14), Some(100.0));
}

#[test]
fn test_all_losses_is_0() {
    let rsi = calculate_rsi(&falling(20), 14).unwrap();
    assert!(rsi.abs() < 1e-12);
}

#[test]
fn test_balanced_changes_near_50() {
    // Alternating +1/-1 deltas: equal average gain and loss.
    let mut closes = vec![100.0];
    for i in 0..20 {
        let last = *closes.last().unwrap();
        closes.push(if i % 2 == 0 { last + 1.0 } else { last - 1.0 });
    }
    let rsi = calculate_rsi(&closes, 14).unwrap();
    assert!((rsi - 50.0).abs() < 1e-9);
}

#[test]
fn test_domain_bounds() {
    for closes in [rising(30), falling(30)] {
        let rsi = calculate_rsi(&closes, 14).unwrap();
        assert!((0.0..=100.0).contains(&rsi));
    }
}
