//! The per-symbol evaluation engine.
//!
//! `Engine` owns every piece of per-symbol state (rolling windows, throttle
//! bookkeeping) in one place, keyed by symbol. One `on_price` call runs a
//! full cycle: append, compute indicators, evaluate the rule set, check the
//! cooldown, size the trade, commit the cooldown. Cycles for different
//! symbols never share mutable state, so a failing symbol cannot disturb
//! another.

pub mod error;
pub mod throttle;
pub mod window;

pub use error::EngineError;
pub use throttle::ThrottleGate;
pub use window::{Granularity, RollingWindow};

use crate::config::Config;
use crate::indicators::engine::IndicatorEngine;
use crate::models::decision::{Signal, TradeDecision};
use crate::risk::RiskSizer;
use crate::signals::engine::SignalEngine;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::debug;

pub struct Engine {
    indicator_engine: IndicatorEngine,
    signal_engine: SignalEngine,
    risk_sizer: RiskSizer,
    throttle: ThrottleGate,
    windows: HashMap<(String, Granularity), RollingWindow>,
    window_capacity: usize,
}

impl Engine {
    pub fn new(config: &Config) -> Self {
        Self {
            indicator_engine: IndicatorEngine::new(config.indicators.clone()),
            signal_engine: SignalEngine::new(config.policy, config.thresholds.clone()),
            risk_sizer: RiskSizer::new(config.account_size, config.risk_pct),
            throttle: ThrottleGate::new(config.cooldown()),
            windows: HashMap::new(),
            window_capacity: config.window_capacity,
        }
    }

    /// Run one evaluation cycle for a freshly observed price.
    ///
    /// Returns `Ok(Some(decision))` when a signal fired, passed the
    /// cooldown, and was risk-sized; `Ok(None)` when no rule matched or the
    /// cooldown suppressed re-emission. Errors leave the symbol's state
    /// consistent: an `InvalidSample` never touches the window, and a
    /// sizing rejection never consumes the cooldown.
    pub fn on_price(
        &mut self,
        symbol: &str,
        granularity: Granularity,
        price: f64,
        now: DateTime<Utc>,
    ) -> Result<Option<TradeDecision>, EngineError> {
        let window = self
            .windows
            .entry((symbol.to_string(), granularity))
            .or_insert_with(|| RollingWindow::new(self.window_capacity));
        window.append(price)?;

        let snapshot = window.snapshot();
        let indicators = self.indicator_engine.compute(&snapshot)?;

        let signal = self.signal_engine.evaluate(&indicators, price);
        if signal == Signal::None {
            return Ok(None);
        }

        if !self.throttle.allow(symbol, now) {
            debug!(symbol = %symbol, signal = %signal, "signal suppressed by cooldown");
            return Ok(None);
        }

        let decision = self
            .risk_sizer
            .size(symbol, signal, price, &indicators, now)?;
        self.throttle.commit(symbol, now);
        Ok(Some(decision))
    }

    /// Samples currently held for a (symbol, granularity) window.
    pub fn window_len(&self, symbol: &str, granularity: Granularity) -> usize {
        self.windows
            .get(&(symbol.to_string(), granularity))
            .map_or(0, RollingWindow::len)
    }

    pub fn throttle(&self) -> &ThrottleGate {
        &self.throttle
    }
}
