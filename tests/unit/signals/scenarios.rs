//! Scoring scenarios for characteristic market shapes

use chrono::Utc;
use northscan::models::Bar;
use northscan::signals::SignalEngine;

fn bars_with_spread(closes: &[f64], spread: f64) -> Vec<Bar> {
    closes
        .iter()
        .map(|&c| {
            Bar::new(
                c,
                c + spread / 2.0,
                c - spread / 2.0,
                c,
                1000.0,
                Utc::now(),
            )
        })
        .collect()
}

#[test]
fn test_strictly_increasing_closes() {
    // Strictly rising closes push RSI to 100 (zero-loss policy), which
    // misses the 45-80 band: trend and SMA conditions still pass.
    let closes: Vec<f64> = (0..35).map(|i| 100.0 + i as f64).collect();
    let bars = bars_with_spread(&closes, 1.0);
    let result = SignalEngine::evaluate("AAPL", &bars, true).unwrap();
    assert_eq!(result.score, 70);

    // Flat spread of 1.0: offsets follow the ATR proxy exactly.
    assert!((result.target - result.entry - 2.0).abs() < 1e-9);
    assert!((result.entry - result.stop - 1.0).abs() < 1e-9);
}

#[test]
fn test_downtrend_scores_low() {
    let closes: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
    let bars = bars_with_spread(&closes, 1.0);
    let result = SignalEngine::evaluate("XOM", &bars, true).unwrap();
    // All three positive conditions fail: RSI = 0, EMA10 < EMA30,
    // close below SMA20.
    assert_eq!(result.score, 0);
}

#[test]
fn test_downtrend_bearish_regime_goes_negative() {
    let closes: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
    let bars = bars_with_spread(&closes, 1.0);
    let result = SignalEngine::evaluate("XOM", &bars, false).unwrap();
    assert_eq!(result.score, -20);
}

#[test]
fn test_flat_series_partial_score() {
    // Constant closes: no momentum edge (EMA10 == EMA30), close == SMA20,
    // and zero deltas hit the zero-loss policy (RSI = 100, outside the
    // band). Nothing qualifies.
    let closes = vec![100.0; 40];
    let bars = bars_with_spread(&closes, 2.0);
    let result = SignalEngine::evaluate("PG", &bars, true).unwrap();
    assert_eq!(result.score, 0);
    // Spread of 2.0 drives the offsets.
    assert_eq!(result.stop, 98.0);
    assert_eq!(result.target, 104.0);
}
