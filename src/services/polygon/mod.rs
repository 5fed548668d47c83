//! Polygon batched snapshot provider (US groups).

pub mod provider;

pub use provider::SnapshotProvider;
