//! Pricewatch: a streaming indicator and signal engine.
//!
//! Watches spot prices for a set of symbols, maintains a bounded rolling
//! window per symbol, computes technical indicators over that window, and
//! emits risk-sized LONG/SHORT trade decisions gated by multi-indicator
//! confirmation and a per-symbol cooldown.

pub mod common;
pub mod config;
pub mod core;
pub mod engine;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod risk;
pub mod services;
pub mod signals;
