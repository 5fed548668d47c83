//! Shared numeric helpers used across indicators and scoring.

pub mod math;
