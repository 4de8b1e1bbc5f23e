//! Complete-or-nothing indicator computation over a window snapshot.

use crate::engine::error::EngineError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi, calculate_stochastic};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::{calculate_atr, calculate_bollinger_bands};
use crate::models::indicators::IndicatorSnapshot;
use serde::{Deserialize, Serialize};

/// Indicator periods. Defaults match the classic parameterization: RSI 14,
/// MACD 12/26/9, SMA 20/50, ATR 14, Bollinger 20 +/- 2 sigma, Stochastic
/// 14 with 3-period %D.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub sma_fast_period: usize,
    pub sma_slow_period: usize,
    pub atr_period: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub stoch_lookback: usize,
    pub stoch_smoothing: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            sma_fast_period: 20,
            sma_slow_period: 50,
            atr_period: 14,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            stoch_lookback: 14,
            stoch_smoothing: 3,
        }
    }
}

impl IndicatorConfig {
    /// Minimum window length before every configured indicator can be
    /// computed. The weakest link gates the whole set.
    pub fn min_samples(&self) -> usize {
        [
            self.rsi_period + 1,
            self.macd_slow + self.macd_signal,
            self.sma_fast_period,
            self.sma_slow_period,
            self.atr_period + 1,
            self.bollinger_period,
            self.stoch_lookback + self.stoch_smoothing - 1,
        ]
        .into_iter()
        .max()
        .unwrap_or(1)
    }
}

/// Computes the full indicator set from a close-price snapshot.
///
/// Stateless: every call recomputes from scratch, so concurrent appends to
/// the originating window can never skew a result.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Compute every indicator or fail with `InsufficientData`. A snapshot
    /// with any missing or non-finite value is never returned.
    pub fn compute(&self, closes: &[f64]) -> Result<IndicatorSnapshot, EngineError> {
        let need = self.config.min_samples();
        let insufficient = || EngineError::InsufficientData {
            have: closes.len(),
            need,
        };
        if closes.len() < need {
            return Err(insufficient());
        }

        let cfg = &self.config;
        let rsi = calculate_rsi(closes, cfg.rsi_period).ok_or_else(insufficient)?;
        let (macd_line, macd_signal) =
            calculate_macd(closes, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal)
                .ok_or_else(insufficient)?;
        let sma_fast = calculate_sma(closes, cfg.sma_fast_period).ok_or_else(insufficient)?;
        let sma_slow = calculate_sma(closes, cfg.sma_slow_period).ok_or_else(insufficient)?;
        let atr = calculate_atr(closes, cfg.atr_period).ok_or_else(insufficient)?;
        let (bollinger_upper, bollinger_lower) =
            calculate_bollinger_bands(closes, cfg.bollinger_period, cfg.bollinger_std_dev)
                .ok_or_else(insufficient)?;
        let (stoch_k, stoch_d) =
            calculate_stochastic(closes, cfg.stoch_lookback, cfg.stoch_smoothing)
                .ok_or_else(insufficient)?;

        let snapshot = IndicatorSnapshot {
            rsi,
            macd_line,
            macd_signal,
            sma_fast,
            sma_slow,
            atr,
            bollinger_upper,
            bollinger_lower,
            stoch_k,
            stoch_d,
        };

        if !snapshot.is_finite() {
            return Err(insufficient());
        }
        Ok(snapshot)
    }
}
