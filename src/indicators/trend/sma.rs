//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::{Bar, SmaIndicator};

/// Calculate SMA of closing prices for a specific period
pub fn calculate_sma(bars: &[Bar], period: u32) -> Option<SmaIndicator> {
    if bars.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let sma_value = math::sma(&closes, period as usize)?;

    Some(SmaIndicator {
        value: sma_value,
        period,
    })
}
