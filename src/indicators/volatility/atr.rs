//! Range-based ATR approximation

use crate::common::math;
use crate::models::{AtrIndicator, Bar};

/// Calculate ATR as the rolling mean of (high - low) over `period` bars.
///
/// This is a simplified range proxy: it ignores the prior close, so gaps do
/// not widen it the way canonical true range would. The scoring pipeline
/// only uses it to size stop and target offsets.
pub fn calculate_range_atr(bars: &[Bar], period: u32) -> Option<AtrIndicator> {
    if bars.len() < period as usize {
        return None;
    }

    let ranges: Vec<f64> = bars.iter().map(|b| b.high - b.low).collect();
    let atr_value = math::sma(&ranges, period as usize)?;

    Some(AtrIndicator {
        value: atr_value,
        period,
    })
}

/// Calculate range ATR with default period (14)
pub fn calculate_range_atr_default(bars: &[Bar]) -> Option<AtrIndicator> {
    calculate_range_atr(bars, 14)
}
