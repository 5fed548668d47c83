//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::{Bar, EmaIndicator};

/// Calculate EMA of closing prices for a specific period
pub fn calculate_ema(bars: &[Bar], period: u32) -> Option<EmaIndicator> {
    if bars.len() < period as usize {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let ema_value = math::ema(&closes, period as usize)?;

    Some(EmaIndicator {
        value: ema_value,
        period,
    })
}

/// Check whether the fast EMA sits above the slow EMA (short-term momentum
/// above medium-term). None if the series is too short for either window.
pub fn fast_above_slow(bars: &[Bar], fast_period: u32, slow_period: u32) -> Option<bool> {
    let fast = calculate_ema(bars, fast_period)?;
    let slow = calculate_ema(bars, slow_period)?;
    Some(fast.value > slow.value)
}
