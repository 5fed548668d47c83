//! Per-symbol historical chart provider (Canadian group, regime filter).

pub mod provider;

pub use provider::ChartProvider;
