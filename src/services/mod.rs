//! Market data providers.

pub mod chart;
pub mod market_data;
pub mod polygon;

pub use chart::ChartProvider;
pub use market_data::{BarSource, FetchOutcome, TrendBarSource};
pub use polygon::SnapshotProvider;
