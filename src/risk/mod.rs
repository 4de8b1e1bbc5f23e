//! ATR-based risk sizing for accepted signals.

use crate::engine::error::EngineError;
use crate::models::decision::{Signal, TradeDecision};
use crate::models::indicators::IndicatorSnapshot;
use chrono::{DateTime, Utc};

/// Stop sits 2 ATR from entry, target 3 ATR, so reward/risk is 1.5 by
/// construction.
pub const STOP_ATR_MULTIPLE: f64 = 2.0;
pub const TARGET_ATR_MULTIPLE: f64 = 3.0;

/// Turns a directional signal into concrete trade parameters against a
/// fixed account size and per-trade risk percentage.
#[derive(Debug, Clone)]
pub struct RiskSizer {
    account_size: f64,
    risk_pct: f64,
}

impl RiskSizer {
    pub fn new(account_size: f64, risk_pct: f64) -> Self {
        Self {
            account_size,
            risk_pct,
        }
    }

    /// Size one trade. Rejects when the signal carries no direction, when
    /// ATR gives no volatility basis for stops, or when the stop distance
    /// collapses to zero.
    pub fn size(
        &self,
        symbol: &str,
        signal: Signal,
        entry_price: f64,
        indicators: &IndicatorSnapshot,
        timestamp: DateTime<Utc>,
    ) -> Result<TradeDecision, EngineError> {
        if !signal.is_directional() {
            return Err(EngineError::Rejected {
                reason: "no directional signal".to_string(),
            });
        }

        let atr = indicators.atr;
        if atr <= 0.0 {
            return Err(EngineError::Rejected {
                reason: format!("non-positive ATR {atr}"),
            });
        }

        let (stop_loss, take_profit) = match signal {
            Signal::Long => (
                entry_price - STOP_ATR_MULTIPLE * atr,
                entry_price + TARGET_ATR_MULTIPLE * atr,
            ),
            Signal::Short => (
                entry_price + STOP_ATR_MULTIPLE * atr,
                entry_price - TARGET_ATR_MULTIPLE * atr,
            ),
            Signal::None => unreachable!("checked above"),
        };

        let stop_distance = (entry_price - stop_loss).abs();
        if stop_distance == 0.0 {
            return Err(EngineError::Rejected {
                reason: "zero stop distance".to_string(),
            });
        }

        let risk_amount = self.account_size * (self.risk_pct / 100.0);
        let position_size = risk_amount / stop_distance;
        let risk_reward = ((take_profit - entry_price) / (stop_loss - entry_price)).abs();

        Ok(TradeDecision {
            symbol: symbol.to_string(),
            signal,
            entry_price,
            stop_loss,
            take_profit,
            position_size,
            risk_reward,
            indicators: indicators.clone(),
            timestamp,
        })
    }
}
