//! Typed cycle errors.
//!
//! The source of record for what can go wrong in one evaluation cycle.
//! None of these are fatal: a failed cycle leaves per-symbol state intact
//! and the next cycle recomputes everything from the current window.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Price was non-positive or non-finite; the window was not touched.
    #[error("invalid price sample: {price}")]
    InvalidSample { price: f64 },

    /// The window is too short, or an indicator produced a non-finite
    /// value. No signal is evaluated this cycle.
    #[error("insufficient data: {have} samples, {need} required")]
    InsufficientData { have: usize, need: usize },

    /// Risk sizing cannot proceed; the signal is suppressed, not retried.
    #[error("risk sizing rejected: {reason}")]
    Rejected { reason: String },
}
