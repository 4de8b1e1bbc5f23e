//! Decision sinks.
//!
//! Fire-and-forget from the engine's perspective: a sink failure is logged
//! and never propagated back into the pipeline.

use crate::models::decision::TradeDecision;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

pub trait DecisionSink: Send + Sync {
    fn emit(&self, decision: &TradeDecision);
}

/// Logs each decision through the tracing pipeline.
pub struct TracingSink;

impl DecisionSink for TracingSink {
    fn emit(&self, decision: &TradeDecision) {
        info!(
            symbol = %decision.symbol,
            signal = %decision.signal,
            entry = decision.entry_price,
            stop_loss = decision.stop_loss,
            take_profit = decision.take_profit,
            position_size = decision.position_size,
            risk_reward = decision.risk_reward,
            rsi = decision.indicators.rsi,
            "trade decision"
        );
    }
}

/// Appends one JSON line per decision to a log file.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DecisionSink for FileSink {
    fn emit(&self, decision: &TradeDecision) {
        let line = match serde_json::to_string(decision) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to serialize decision");
                return;
            }
        };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "failed to append decision log");
        }
    }
}
