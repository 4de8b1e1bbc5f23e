//! Bollinger Bands indicator

use crate::common::math;

/// Calculate Bollinger Bands: SMA(period) +/- std_dev standard deviations.
///
/// Returns `(upper, lower)`.
pub fn calculate_bollinger_bands(
    closes: &[f64],
    period: usize,
    std_dev: f64,
) -> Option<(f64, f64)> {
    let middle = math::sma(closes, period)?;
    let std = math::standard_deviation(closes, period)?;
    Some((middle + std_dev * std, middle - std_dev * std))
}
