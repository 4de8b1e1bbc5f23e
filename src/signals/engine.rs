//! Rule-based signal evaluation.
//!
//! Two confirmation policies share one engine. Both are conjunctive: every
//! listed condition must hold, a single failure yields `Signal::None`.
//! Evaluation is deterministic and side-effect-free.

use crate::models::decision::Signal;
use crate::models::indicators::IndicatorSnapshot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which confirmation rule set the engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalPolicy {
    /// RSI extreme + MACD cross + price above/below fast SMA + fast/slow
    /// SMA alignment.
    StrictMultiFactor,
    /// RSI extreme + MACD cross + price outside the Bollinger band +
    /// stochastic extreme.
    BandConfirmed,
}

impl FromStr for SignalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" | "strict_multi_factor" => Ok(SignalPolicy::StrictMultiFactor),
            "band" | "band_confirmed" => Ok(SignalPolicy::BandConfirmed),
            other => Err(format!("unknown signal policy '{other}'")),
        }
    }
}

/// Oscillator thresholds the rules compare against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub stoch_low: f64,
    pub stoch_high: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            stoch_low: 20.0,
            stoch_high: 80.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignalEngine {
    policy: SignalPolicy,
    thresholds: SignalThresholds,
}

impl SignalEngine {
    pub fn new(policy: SignalPolicy, thresholds: SignalThresholds) -> Self {
        Self { policy, thresholds }
    }

    pub fn policy(&self) -> SignalPolicy {
        self.policy
    }

    /// Evaluate the configured rule set against one indicator snapshot and
    /// the current price.
    pub fn evaluate(&self, indicators: &IndicatorSnapshot, price: f64) -> Signal {
        match self.policy {
            SignalPolicy::StrictMultiFactor => self.evaluate_strict(indicators, price),
            SignalPolicy::BandConfirmed => self.evaluate_band(indicators, price),
        }
    }

    fn evaluate_strict(&self, ind: &IndicatorSnapshot, price: f64) -> Signal {
        let t = &self.thresholds;

        let long = ind.rsi < t.rsi_oversold
            && ind.macd_line > ind.macd_signal
            && price > ind.sma_fast
            && ind.sma_fast > ind.sma_slow;
        if long {
            return Signal::Long;
        }

        let short = ind.rsi > t.rsi_overbought
            && ind.macd_line < ind.macd_signal
            && price < ind.sma_fast
            && ind.sma_fast < ind.sma_slow;
        if short {
            return Signal::Short;
        }

        Signal::None
    }

    fn evaluate_band(&self, ind: &IndicatorSnapshot, price: f64) -> Signal {
        let t = &self.thresholds;

        let long = ind.rsi < t.rsi_oversold
            && ind.macd_line > ind.macd_signal
            && price < ind.bollinger_lower
            && ind.stoch_k < t.stoch_low;
        if long {
            return Signal::Long;
        }

        let short = ind.rsi > t.rsi_overbought
            && ind.macd_line < ind.macd_signal
            && price > ind.bollinger_upper
            && ind.stoch_k > t.stoch_high;
        if short {
            return Signal::Short;
        }

        Signal::None
    }
}
