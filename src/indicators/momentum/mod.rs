//! Momentum indicators: RSI, MACD, Stochastic Oscillator.

pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use macd::calculate_macd;
pub use rsi::calculate_rsi;
pub use stochastic::calculate_stochastic;
