//! Moving-average and dispersion primitives shared by the indicators.
//!
//! All functions return `None` when the input is shorter than the requested
//! period (or the period is zero) so callers can surface a single
//! insufficient-data condition instead of propagating NaN.

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential moving average over the whole slice, seeded with an SMA of
/// the first `period` values.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let mut current = sma(&values[..period], period)?;
    for &value in &values[period..] {
        current = ema_from_previous(value, current, period);
    }
    Some(current)
}

/// One EMA step given the previous EMA value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    value * k + previous * (1.0 - k)
}

/// Population standard deviation over the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / period as f64;
    Some(variance.sqrt())
}

/// True range of one bar relative to the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Highest value over the last `period` entries.
pub fn highest(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    values[values.len() - period..]
        .iter()
        .copied()
        .reduce(f64::max)
}

/// Lowest value over the last `period` entries.
pub fn lowest(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    values[values.len() - period..]
        .iter()
        .copied()
        .reduce(f64::min)
}
