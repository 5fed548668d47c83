//! Unit tests for RSI indicator

use chrono::Utc;
use northscan::indicators::momentum::{calculate_rsi, calculate_rsi_default};
use northscan::models::Bar;

fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .map(|&c| Bar::new(c, c + 0.5, c - 0.5, c, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let closes: Vec<f64> = (0..14).map(|i| 100.0 + i as f64).collect();
    let bars = bars_from_closes(&closes);
    // 14 bars give only 13 deltas; RSI(14) needs 14.
    assert!(calculate_rsi(&bars, 14).is_none());
}

#[test]
fn test_rsi_all_gains_is_100() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let bars = bars_from_closes(&closes);
    let rsi = calculate_rsi(&bars, 14).unwrap();
    // Zero average loss resolves to RSI = 100 by policy.
    assert_eq!(rsi.value, 100.0);
}

#[test]
fn test_rsi_all_losses_near_zero() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let bars = bars_from_closes(&closes);
    let rsi = calculate_rsi(&bars, 14).unwrap();
    assert!(rsi.value.abs() < 1e-10);
}

#[test]
fn test_rsi_alternating_series() {
    // Deltas alternate +1.0 / -0.5; any 14-delta window holds 7 of each,
    // so RS = (7/14) / (3.5/14) = 2 and RSI = 100 - 100/3.
    let mut closes = vec![100.0];
    for i in 0..28 {
        let delta = if i % 2 == 0 { 1.0 } else { -0.5 };
        closes.push(closes.last().unwrap() + delta);
    }
    let bars = bars_from_closes(&closes);
    let rsi = calculate_rsi(&bars, 14).unwrap();
    assert!((rsi.value - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn test_rsi_default_period() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();
    let bars = bars_from_closes(&closes);
    let rsi = calculate_rsi_default(&bars).unwrap();
    assert_eq!(rsi.period, 14);
    assert!(rsi.value >= 0.0 && rsi.value <= 100.0);
}
