//! Simple moving average indicator

use crate::common::math;

/// Calculate the SMA of the last `period` closes.
pub fn calculate_sma(closes: &[f64], period: usize) -> Option<f64> {
    math::sma(closes, period)
}
