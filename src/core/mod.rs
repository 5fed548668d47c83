//! Core application primitives.

pub mod scheduler;

pub use scheduler::{ScanScheduler, ScanSink};
