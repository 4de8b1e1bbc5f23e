//! Unit tests for Bollinger Bands

use pricewatch::indicators::volatility::calculate_bollinger_bands;

#[test]
fn test_insufficient_data() {
    let closes = vec![100.0; 19];
    assert!(calculate_bollinger_bands(&closes, 20, 2.0).is_none());
}

#[test]
fn test_flat_series_collapses_bands() {
    let closes = vec![100.0; 25];
    let (upper, lower) = calculate_bollinger_bands(&closes, 20, 2.0).unwrap();
    assert_eq!(upper, 100.0);
    assert_eq!(lower, 100.0);
}

#[test]
fn test_bands_are_symmetric_around_sma() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + (i % 5) as f64).collect();
    let (upper, lower) = calculate_bollinger_bands(&closes, 20, 2.0).unwrap();
    let middle: f64 = closes[5..].iter().sum::<f64>() / 20.0;
    assert!(((upper + lower) / 2.0 - middle).abs() < 1e-9);
    assert!(upper > middle);
    assert!(lower < middle);
}

#[test]
fn test_band_width_scales_with_k() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + (i % 7) as f64).collect();
    let (u1, l1) = calculate_bollinger_bands(&closes, 20, 1.0).unwrap();
    let (u2, l2) = calculate_bollinger_bands(&closes, 20, 2.0).unwrap();
    assert!(((u2 - l2) - 2.0 * (u1 - l1)).abs() < 1e-9);
}
