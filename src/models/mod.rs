//! Shared data models spanning the engine layers.

pub mod decision;
pub mod indicators;

pub use decision::{Signal, TradeDecision};
pub use indicators::IndicatorSnapshot;
