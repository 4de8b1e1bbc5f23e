//! Signal evaluation: confirmation rules over a computed indicator set.

pub mod engine;

pub use engine::{SignalEngine, SignalPolicy, SignalThresholds};
