//! Canonical OHLCV bar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One price bar in the canonical schema all providers normalize into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Normalize a bar series to ascending timestamp order.
///
/// Indicators use trailing windows, so providers that return newest-first
/// series must be reordered before evaluation.
pub fn sort_bars(bars: &mut [Bar]) {
    bars.sort_by_key(|b| b.timestamp);
}
