//! Per-symbol minimum-interval gate between accepted signals.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Tracks the last committed signal time per symbol and refuses re-emission
/// inside the cooldown. Check (`allow`) and record (`commit`) are separate
/// steps: evaluating a signal that is never emitted must not consume the
/// cooldown.
#[derive(Debug)]
pub struct ThrottleGate {
    cooldown: Duration,
    last_commit: HashMap<String, DateTime<Utc>>,
}

impl ThrottleGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_commit: HashMap::new(),
        }
    }

    /// True when the symbol has never emitted, or the cooldown has elapsed
    /// since its last committed emission.
    pub fn allow(&self, symbol: &str, now: DateTime<Utc>) -> bool {
        match self.last_commit.get(symbol) {
            Some(last) => now - *last >= self.cooldown,
            None => true,
        }
    }

    /// Record an emission for the symbol. Call only once the decision is
    /// actually handed to a sink.
    pub fn commit(&mut self, symbol: &str, now: DateTime<Utc>) {
        self.last_commit.insert(symbol.to_string(), now);
    }

    pub fn last_commit(&self, symbol: &str) -> Option<DateTime<Utc>> {
        self.last_commit.get(symbol).copied()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}
