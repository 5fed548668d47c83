//! Unit tests for EMA indicator

use chrono::Utc;
use northscan::indicators::trend::{calculate_ema, calculate_sma, fast_above_slow};
use northscan::models::Bar;

fn create_test_bars(count: usize, base_price: f64) -> Vec<Bar> {
    let mut bars = Vec::new();
    for i in 0..count {
        let price = base_price + (i as f64 * 0.1);
        bars.push(Bar::new(
            price,
            price + 0.05,
            price - 0.05,
            price,
            1000.0,
            Utc::now(),
        ));
    }
    bars
}

#[test]
fn test_ema_insufficient_data() {
    let bars = create_test_bars(10, 100.0);
    assert!(calculate_ema(&bars, 20).is_none());
}

#[test]
fn test_ema_sufficient_data() {
    let bars = create_test_bars(50, 100.0);
    let result = calculate_ema(&bars, 10);
    assert!(result.is_some());
    let ema = result.unwrap();
    assert_eq!(ema.period, 10);
    assert!(ema.value.is_finite());
}

#[test]
fn test_fast_above_slow_in_uptrend() {
    let bars = create_test_bars(50, 100.0);
    assert_eq!(fast_above_slow(&bars, 10, 30), Some(true));
}

#[test]
fn test_fast_above_slow_insufficient_data() {
    let bars = create_test_bars(20, 100.0);
    assert!(fast_above_slow(&bars, 10, 30).is_none());
}

#[test]
fn test_sma_matches_trailing_mean() {
    let bars = create_test_bars(25, 100.0);
    let sma = calculate_sma(&bars, 20).unwrap();
    let expected: f64 = bars[5..].iter().map(|b| b.close).sum::<f64>() / 20.0;
    assert!((sma.value - expected).abs() < 1e-10);
    assert_eq!(sma.period, 20);
}
