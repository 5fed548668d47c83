//! Unit tests for the range-ATR proxy

use chrono::Utc;
use northscan::indicators::volatility::{calculate_range_atr, calculate_range_atr_default};
use northscan::models::Bar;

fn bars_with_spread(count: usize, spread: f64) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            Bar::new(
                close,
                close + spread / 2.0,
                close - spread / 2.0,
                close,
                1000.0,
                Utc::now(),
            )
        })
        .collect()
}

#[test]
fn test_atr_insufficient_data() {
    let bars = bars_with_spread(10, 1.0);
    assert!(calculate_range_atr(&bars, 14).is_none());
}

#[test]
fn test_atr_flat_spread() {
    let bars = bars_with_spread(30, 1.0);
    let atr = calculate_range_atr(&bars, 14).unwrap();
    assert!((atr.value - 1.0).abs() < 1e-10);
}

#[test]
fn test_atr_uses_trailing_window() {
    // Old bars have a wide spread; only the trailing 14 narrow bars count.
    let mut bars = bars_with_spread(20, 8.0);
    bars.extend(bars_with_spread(14, 2.0));
    let atr = calculate_range_atr(&bars, 14).unwrap();
    assert!((atr.value - 2.0).abs() < 1e-10);
}

#[test]
fn test_atr_default_period() {
    let bars = bars_with_spread(30, 1.5);
    let atr = calculate_range_atr_default(&bars).unwrap();
    assert_eq!(atr.period, 14);
    assert!((atr.value - 1.5).abs() < 1e-10);
}
