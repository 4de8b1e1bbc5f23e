use serde::{Deserialize, Serialize};

/// The complete indicator set computed from one window snapshot.
///
/// This is all-or-nothing by construction: the indicator engine only builds
/// a snapshot when every field could be computed and is finite. Downstream
/// code never has to reason about missing indicators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub sma_fast: f64,
    pub sma_slow: f64,
    pub atr: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
}

impl IndicatorSnapshot {
    /// True when every field is a finite number.
    pub fn is_finite(&self) -> bool {
        [
            self.rsi,
            self.macd_line,
            self.macd_signal,
            self.sma_fast,
            self.sma_slow,
            self.atr,
            self.bollinger_upper,
            self.bollinger_lower,
            self.stoch_k,
            self.stoch_d,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
