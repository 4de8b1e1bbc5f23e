//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;

/// Calculate the MACD line and its signal line.
///
/// MACD line = EMA(fast) - EMA(slow)
/// Signal    = EMA(signal_period) of the MACD-line series
///
/// Returns `(macd_line, signal_line)`.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<(f64, f64)> {
    if fast_period == 0 || signal_period == 0 || fast_period >= slow_period {
        return None;
    }
    if closes.len() < slow_period + signal_period {
        return None;
    }

    // Seed both EMAs, then walk the series once building the MACD line at
    // every step from the point the slow EMA exists.
    let mut fast_ema = math::sma(&closes[..fast_period], fast_period)?;
    let mut slow_ema = math::sma(&closes[..slow_period], slow_period)?;
    for &close in &closes[fast_period..slow_period] {
        fast_ema = math::ema_from_previous(close, fast_ema, fast_period);
    }

    let mut macd_series = Vec::with_capacity(closes.len() - slow_period + 1);
    macd_series.push(fast_ema - slow_ema);
    for &close in &closes[slow_period..] {
        fast_ema = math::ema_from_previous(close, fast_ema, fast_period);
        slow_ema = math::ema_from_previous(close, slow_ema, slow_period);
        macd_series.push(fast_ema - slow_ema);
    }

    let macd_line = *macd_series.last()?;
    let signal_line = math::ema(&macd_series, signal_period)?;
    Some((macd_line, signal_line))
}
