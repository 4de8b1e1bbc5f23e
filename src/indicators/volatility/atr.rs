//! ATR (Average True Range) from a close-only proxy.
//!
//! With only close prices available, each bar's high/low is approximated
//! by the rolling 2-sample max/min of the close series. This collapses the
//! true range to the absolute close-to-close move; it understates real
//! intrabar volatility and is kept for parity with the close-only feed.

use crate::common::math;

/// Calculate ATR over `period` true-range values, SMA-smoothed.
pub fn calculate_atr(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut tr_values = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let high = pair[0].max(pair[1]);
        let low = pair[0].min(pair[1]);
        tr_values.push(math::true_range(high, low, pair[0]));
    }

    math::sma(&tr_values, period)
}
