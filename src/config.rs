//! Environment-based configuration.
//!
//! All knobs come from environment variables with sensible defaults so the
//! scanner runs out of the box. `POLYGON_API_KEY` degrades to a placeholder
//! rather than hard-failing: an invalid key simply yields empty snapshot
//! responses, which the scan loop treats as fetch failures.

use std::env;

pub const DEFAULT_REFRESH_SECONDS: u64 = 60;
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_REGIME_TTL_SECONDS: u64 = 300;

pub const POLYGON_BASE_URL: &str = "https://api.polygon.io";
pub const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Current deployment environment (controls log formatting).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Polygon API key, with a placeholder fallback.
pub fn get_polygon_api_key() -> String {
    env::var("POLYGON_API_KEY").unwrap_or_else(|_| "YOUR_POLYGON_API_KEY".to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Aggregated scanner settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub refresh_seconds: u64,
    pub top_n: usize,
    pub regime_ttl_seconds: u64,
    pub polygon_base_url: String,
    pub chart_base_url: String,
    /// Per-group CSV ticker lists: (TSX, NYSE, NASDAQ).
    pub tsx_tickers_csv: String,
    pub nyse_tickers_csv: String,
    pub nasdaq_tickers_csv: String,
}

impl ScannerConfig {
    pub fn from_env() -> Self {
        Self {
            refresh_seconds: env_parse("SCAN_REFRESH_SECONDS", DEFAULT_REFRESH_SECONDS),
            top_n: env_parse("SCAN_TOP_N", DEFAULT_TOP_N),
            regime_ttl_seconds: env_parse("REGIME_TTL_SECONDS", DEFAULT_REGIME_TTL_SECONDS),
            polygon_base_url: env::var("POLYGON_BASE_URL")
                .unwrap_or_else(|_| POLYGON_BASE_URL.to_string()),
            chart_base_url: env::var("CHART_BASE_URL")
                .unwrap_or_else(|_| CHART_BASE_URL.to_string()),
            tsx_tickers_csv: env::var("TSX_TICKERS_CSV")
                .unwrap_or_else(|_| "tickers_tsx.csv".to_string()),
            nyse_tickers_csv: env::var("NYSE_TICKERS_CSV")
                .unwrap_or_else(|_| "tickers_nyse.csv".to_string()),
            nasdaq_tickers_csv: env::var("NASDAQ_TICKERS_CSV")
                .unwrap_or_else(|_| "tickers_nasdaq.csv".to_string()),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: DEFAULT_REFRESH_SECONDS,
            top_n: DEFAULT_TOP_N,
            regime_ttl_seconds: DEFAULT_REGIME_TTL_SECONDS,
            polygon_base_url: POLYGON_BASE_URL.to_string(),
            chart_base_url: CHART_BASE_URL.to_string(),
            tsx_tickers_csv: "tickers_tsx.csv".to_string(),
            nyse_tickers_csv: "tickers_nyse.csv".to_string(),
            nasdaq_tickers_csv: "tickers_nasdaq.csv".to_string(),
        }
    }
}
