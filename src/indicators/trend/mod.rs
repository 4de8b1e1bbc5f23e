//! Trend indicators: simple moving averages.

pub mod sma;

pub use sma::calculate_sma;
