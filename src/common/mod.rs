//! Shared numeric primitives used across indicator implementations.

pub mod math;
