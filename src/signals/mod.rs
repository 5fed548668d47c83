//! Signal evaluation.

pub mod engine;

pub use engine::{SignalEngine, MIN_BARS};
