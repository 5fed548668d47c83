//! Shared data models spanning the scanner layers.

pub mod bar;
pub mod indicators;
pub mod market;
pub mod signal;

pub use bar::{sort_bars, Bar};
pub use indicators::{AtrIndicator, EmaIndicator, RsiIndicator, SmaIndicator};
pub use market::{MarketGroup, RegimeFlags};
pub use signal::SignalResult;
