//! Boundary collaborators: the price source the engine consumes and the
//! sinks accepted decisions are handed to. Nothing in here feeds back into
//! indicator or signal computation.

pub mod price_source;
pub mod sink;

pub use price_source::{CoinbasePriceSource, PriceSource, PriceSourceError};
pub use sink::{DecisionSink, FileSink, TracingSink};
