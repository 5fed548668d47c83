//! Historical-data chart client.
//!
//! Serves two callers: the Canadian group's intraday fetch (5 trading days
//! of 5-minute bars, one symbol per request) and the index trend filter
//! (6 months of daily bars). The chart document carries timestamps in epoch
//! seconds plus parallel quote arrays whose entries may be null for halted
//! sessions; incomplete rows are skipped during normalization.

use crate::models::{sort_bars, Bar, MarketGroup};
use crate::services::market_data::{BarSource, FetchOutcome, TrendBarSource};
use chrono::DateTime;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct ChartProvider {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChartDocument {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    #[serde(default)]
    result: Vec<ChartResult>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

impl ChartProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    async fn fetch_chart(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await?
            .error_for_status()?;

        let document = response.json::<ChartDocument>().await?;
        let result = document
            .chart
            .result
            .into_iter()
            .next()
            .ok_or("chart document has no result")?;

        Ok(Self::normalize(result))
    }

    fn normalize(result: ChartResult) -> Vec<Bar> {
        let quote = match result.indicators.quote.into_iter().next() {
            Some(quote) => quote,
            None => return Vec::new(),
        };

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, &ts) in result.timestamp.iter().enumerate() {
            let row = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = row {
                if let Some(timestamp) = DateTime::from_timestamp(ts, 0) {
                    bars.push(Bar::new(open, high, low, close, volume, timestamp));
                }
            }
        }
        sort_bars(&mut bars);
        bars
    }
}

#[async_trait::async_trait]
impl BarSource for ChartProvider {
    async fn fetch(
        &self,
        symbols: &[String],
        group: MarketGroup,
    ) -> HashMap<String, FetchOutcome> {
        let mut outcomes = HashMap::new();

        for symbol in symbols {
            let outcome = match self.fetch_chart(symbol, "5d", "5m").await {
                Ok(bars) if bars.is_empty() => FetchOutcome::NoData,
                Ok(bars) => FetchOutcome::Bars(bars),
                Err(e) => {
                    warn!(symbol = %symbol, group = group.label(), error = %e, "chart fetch failed");
                    FetchOutcome::FetchFailed(e.to_string())
                }
            };
            debug!(symbol = %symbol, group = group.label(), "chart fetch complete");
            outcomes.insert(symbol.clone(), outcome);
        }

        outcomes
    }
}

#[async_trait::async_trait]
impl TrendBarSource for ChartProvider {
    async fn fetch_daily(
        &self,
        symbol: &str,
        months: u32,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>> {
        let range = format!("{}mo", months);
        self.fetch_chart(symbol, &range, "1d").await
    }
}
