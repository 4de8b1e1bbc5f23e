//! Stochastic Oscillator computed from close prices only.
//!
//! With no OHLC available, the close series stands in for both high and
//! low, so %K measures where the latest close sits inside the lookback's
//! close range.

use crate::common::math;

/// Calculate %K over `lookback` samples and %D as an SMA of the last
/// `smoothing` %K values. Returns `(percent_k, percent_d)`.
///
/// A zero-width lookback range (flat prices) pins %K to 50 rather than
/// dividing by zero.
pub fn calculate_stochastic(
    closes: &[f64],
    lookback: usize,
    smoothing: usize,
) -> Option<(f64, f64)> {
    if lookback == 0 || smoothing == 0 {
        return None;
    }
    if closes.len() < lookback + smoothing - 1 {
        return None;
    }

    let mut k_values = Vec::with_capacity(smoothing);
    for end in closes.len() - smoothing + 1..=closes.len() {
        let range = &closes[end - lookback..end];
        let high = math::highest(range, lookback)?;
        let low = math::lowest(range, lookback)?;
        let close = closes[end - 1];
        let k = if high == low {
            50.0
        } else {
            (close - low) / (high - low) * 100.0
        };
        k_values.push(k);
    }

    let percent_k = *k_values.last()?;
    let percent_d = k_values.iter().sum::<f64>() / k_values.len() as f64;
    Some((percent_k, percent_d))
}
