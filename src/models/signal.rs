//! Scored scan result for a single symbol.

use serde::{Deserialize, Serialize};

/// Immutable output of one signal evaluation. Produced fresh each scan
/// cycle; has no identity beyond its fields.
///
/// `score` is nominally 0-100 but can go to -20 after the regime penalty;
/// no clamping is applied beyond the additive terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub symbol: String,
    pub score: i32,
    /// Suggested entry: last close, rounded to cents.
    pub entry: f64,
    /// Entry minus one range-ATR.
    pub stop: f64,
    /// Entry plus two range-ATRs.
    pub target: f64,
}
