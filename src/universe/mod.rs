//! Symbol universe: per-group ticker lists loaded once per session.
//!
//! Each group reads an optional one-column CSV (`Symbol` header, one ticker
//! per row). A missing or unreadable file falls back to a small hardcoded
//! default list, and every group is capped at 50 symbols.

use crate::config::ScannerConfig;
use crate::models::MarketGroup;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

pub const MAX_SYMBOLS_PER_GROUP: usize = 50;

const DEFAULT_TSX: &[&str] = &["SHOP.TO", "RY.TO", "TD.TO", "ENB.TO", "CNQ.TO"];
const DEFAULT_NYSE: &[&str] = &["JPM", "XOM", "UNH", "V", "PG"];
const DEFAULT_NASDAQ: &[&str] = &["AAPL", "MSFT", "NVDA", "AMZN", "META"];

#[derive(Debug, Deserialize)]
struct TickerRow {
    #[serde(rename = "Symbol")]
    symbol: String,
}

/// Static per-session symbol universe.
#[derive(Debug, Clone)]
pub struct Universe {
    tsx: Vec<String>,
    nyse: Vec<String>,
    nasdaq: Vec<String>,
}

impl Universe {
    pub fn load(config: &ScannerConfig) -> Self {
        Self {
            tsx: load_group(&config.tsx_tickers_csv, MarketGroup::Tsx, DEFAULT_TSX),
            nyse: load_group(&config.nyse_tickers_csv, MarketGroup::Nyse, DEFAULT_NYSE),
            nasdaq: load_group(&config.nasdaq_tickers_csv, MarketGroup::Nasdaq, DEFAULT_NASDAQ),
        }
    }

    pub fn with_groups(tsx: Vec<String>, nyse: Vec<String>, nasdaq: Vec<String>) -> Self {
        Self {
            tsx: cap(tsx),
            nyse: cap(nyse),
            nasdaq: cap(nasdaq),
        }
    }

    pub fn symbols(&self, group: MarketGroup) -> &[String] {
        match group {
            MarketGroup::Tsx => &self.tsx,
            MarketGroup::Nyse => &self.nyse,
            MarketGroup::Nasdaq => &self.nasdaq,
        }
    }
}

/// Parse tickers from any CSV reader with a `Symbol` column.
pub fn parse_tickers<R: std::io::Read>(
    reader: R,
) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut symbols = Vec::new();
    for row in csv_reader.deserialize::<TickerRow>() {
        let row = row?;
        let symbol = row.symbol.trim().to_string();
        if !symbol.is_empty() {
            symbols.push(symbol);
        }
    }
    Ok(cap(symbols))
}

fn cap(mut symbols: Vec<String>) -> Vec<String> {
    symbols.truncate(MAX_SYMBOLS_PER_GROUP);
    symbols
}

fn load_group(path: &str, group: MarketGroup, defaults: &[&str]) -> Vec<String> {
    if Path::new(path).exists() {
        match std::fs::File::open(path).map_err(Into::into).and_then(parse_tickers) {
            Ok(symbols) if !symbols.is_empty() => {
                info!(
                    group = group.label(),
                    count = symbols.len(),
                    path = path,
                    "loaded ticker list"
                );
                return symbols;
            }
            Ok(_) => {
                warn!(group = group.label(), path = path, "ticker list empty, using defaults");
            }
            Err(e) => {
                warn!(group = group.label(), path = path, error = %e, "ticker list unreadable, using defaults");
            }
        }
    } else {
        info!(group = group.label(), path = path, "no ticker list, using defaults");
    }
    defaults.iter().map(|s| s.to_string()).collect()
}
