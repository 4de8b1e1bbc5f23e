//! Technical indicators computed over a close-price window snapshot.
//!
//! Every indicator is a pure function of the slice it is given: no state
//! is carried between calls. Functions return `None` when the series is
//! too short for the requested period.

pub mod engine;
pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::{IndicatorConfig, IndicatorEngine};
