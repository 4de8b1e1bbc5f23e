//! Bounded rolling price window, one per (symbol, granularity) pair.

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Candle interval a window is fed at. The runtime polls one granularity;
/// the engine keys windows by it so several can coexist per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
}

impl Granularity {
    pub fn label(self) -> &'static str {
        match self {
            Granularity::OneMinute => "1m",
            Granularity::FiveMinutes => "5m",
            Granularity::FifteenMinutes => "15m",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-capacity FIFO of observed prices. Oldest sample is evicted when a
/// full window receives a new one; insertion order is otherwise preserved.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one price. Non-positive or non-finite samples are rejected
    /// and the window is left unchanged.
    pub fn append(&mut self, price: f64) -> Result<(), EngineError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(EngineError::InvalidSample { price });
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(price);
        Ok(())
    }

    /// Ordered copy of the current contents, oldest first. Indicator
    /// computation works on the copy so it is unaffected by later appends.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
