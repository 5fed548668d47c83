//! Rolling-window math primitives.

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential moving average with smoothing factor 2 / (period + 1).
///
/// Seeded with the SMA of the first `period` values, then applied
/// recursively over the remainder of the series.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut current = seed;
    for value in &values[period..] {
        current = alpha * value + (1.0 - alpha) * current;
    }
    Some(current)
}

/// Round to two decimal places (price precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
