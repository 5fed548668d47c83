//! Composite opportunity scoring over a normalized bar series.

use crate::common::math::round2;
use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::calculate_range_atr;
use crate::models::{Bar, SignalResult};

/// Minimum bars required by the longest indicator window (EMA 30).
pub const MIN_BARS: usize = 30;

const EMA_FAST: u32 = 10;
const EMA_SLOW: u32 = 30;
const RSI_PERIOD: u32 = 14;
const ATR_PERIOD: u32 = 14;
const SMA_PERIOD: u32 = 20;

pub struct SignalEngine;

impl SignalEngine {
    /// Score a symbol from its bar series and the market-group regime flag.
    ///
    /// Bars must be in ascending timestamp order. Returns None when the
    /// series is shorter than [`MIN_BARS`]; callers drop such symbols
    /// silently rather than reporting an error.
    ///
    /// The score starts at 0 and is evaluated on the most recent bar only:
    /// +40 if EMA(10) > EMA(30), +30 if 45 < RSI(14) < 80, +30 if the last
    /// close is above its 20-period SMA, and -20 if the regime is bearish.
    /// The penalty is additive, never a gate: symbols can still rank in a
    /// bearish regime. RSI windows with zero average loss score as RSI=100
    /// and therefore miss the RSI band.
    pub fn evaluate(symbol: &str, bars: &[Bar], regime_bullish: bool) -> Option<SignalResult> {
        if bars.len() < MIN_BARS {
            return None;
        }

        let ema_fast = calculate_ema(bars, EMA_FAST)?;
        let ema_slow = calculate_ema(bars, EMA_SLOW)?;
        let rsi = calculate_rsi(bars, RSI_PERIOD)?;
        let atr = calculate_range_atr(bars, ATR_PERIOD)?;
        let sma = calculate_sma(bars, SMA_PERIOD)?;

        let last_close = bars.last()?.close;

        let mut score: i32 = 0;
        if ema_fast.value > ema_slow.value {
            score += 40;
        }
        if rsi.value > 45.0 && rsi.value < 80.0 {
            score += 30;
        }
        if last_close > sma.value {
            score += 30;
        }
        if !regime_bullish {
            score -= 20;
        }

        let entry = round2(last_close);
        let stop = round2(last_close - atr.value);
        let target = round2(last_close + 2.0 * atr.value);

        Some(SignalResult {
            symbol: symbol.to_string(),
            score,
            entry,
            stop,
            target,
        })
    }
}
