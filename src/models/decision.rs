use crate::models::indicators::IndicatorSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional trade signal. A decision, not a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Long,
    Short,
    None,
}

impl Signal {
    pub fn is_directional(self) -> bool {
        !matches!(self, Signal::None)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Long => write!(f, "LONG"),
            Signal::Short => write!(f, "SHORT"),
            Signal::None => write!(f, "NONE"),
        }
    }
}

/// One accepted, risk-sized trade signal. Immutable once built; handed to
/// decision sinks by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDecision {
    pub symbol: String,
    pub signal: Signal,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub position_size: f64,
    pub risk_reward: f64,
    pub indicators: IndicatorSnapshot,
    pub timestamp: DateTime<Utc>,
}
