//! Multi-symbol snapshot client for US exchange groups.
//!
//! One GET covers the whole ticker list; each ticker's intraday aggregates
//! come back nested under `day.aggregates` with short field names, which
//! are normalized into the canonical [`Bar`] schema here.

use crate::models::{sort_bars, Bar, MarketGroup};
use crate::services::market_data::{BarSource, FetchOutcome};
use chrono::DateTime;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct SnapshotProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SnapshotResponse {
    #[serde(default)]
    tickers: Vec<SnapshotTicker>,
}

#[derive(Debug, Deserialize)]
struct SnapshotTicker {
    ticker: String,
    day: Option<SnapshotDay>,
}

#[derive(Debug, Deserialize)]
struct SnapshotDay {
    #[serde(default)]
    aggregates: Vec<RawAggregate>,
}

/// Provider-specific aggregate row: o/h/l/c/v plus epoch-millis timestamp.
#[derive(Debug, Deserialize)]
struct RawAggregate {
    o: f64,
    h: f64,
    l: f64,
    c: f64,
    v: f64,
    t: i64,
}

impl SnapshotProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(base_url, api_key, reqwest::Client::new())
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        }
    }

    async fn fetch_snapshot(
        &self,
        symbols: &[String],
    ) -> Result<SnapshotResponse, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!(
            "{}/v2/snapshot/locale/us/markets/stocks/tickers",
            self.base_url
        );
        let response = self
            .client
            .get(&url)
            .query(&[
                ("tickers", symbols.join(",")),
                ("apiKey", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let snapshot = response.json::<SnapshotResponse>().await?;
        Ok(snapshot)
    }

    fn normalize(aggregates: Vec<RawAggregate>) -> Vec<Bar> {
        let mut bars: Vec<Bar> = aggregates
            .into_iter()
            .filter_map(|raw| {
                let timestamp = DateTime::from_timestamp_millis(raw.t)?;
                Some(Bar::new(raw.o, raw.h, raw.l, raw.c, raw.v, timestamp))
            })
            .collect();
        sort_bars(&mut bars);
        bars
    }
}

#[async_trait::async_trait]
impl BarSource for SnapshotProvider {
    async fn fetch(
        &self,
        symbols: &[String],
        group: MarketGroup,
    ) -> HashMap<String, FetchOutcome> {
        let mut outcomes = HashMap::new();
        if symbols.is_empty() {
            return outcomes;
        }

        let snapshot = match self.fetch_snapshot(symbols).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    group = group.label(),
                    error = %e,
                    "snapshot fetch failed for {} symbols",
                    symbols.len()
                );
                let reason = e.to_string();
                for symbol in symbols {
                    outcomes.insert(symbol.clone(), FetchOutcome::FetchFailed(reason.clone()));
                }
                return outcomes;
            }
        };

        let mut by_ticker: HashMap<String, Option<SnapshotDay>> = snapshot
            .tickers
            .into_iter()
            .map(|t| (t.ticker, t.day))
            .collect();

        for symbol in symbols {
            let outcome = match by_ticker.remove(symbol) {
                Some(Some(day)) if !day.aggregates.is_empty() => {
                    FetchOutcome::Bars(Self::normalize(day.aggregates))
                }
                // Present but without bars, or absent from the response
                // entirely: the provider has nothing for this symbol.
                _ => FetchOutcome::NoData,
            };
            debug!(symbol = %symbol, group = group.label(), outcome = outcome_tag(&outcome), "snapshot outcome");
            outcomes.insert(symbol.clone(), outcome);
        }

        outcomes
    }
}

fn outcome_tag(outcome: &FetchOutcome) -> &'static str {
    match outcome {
        FetchOutcome::Bars(_) => "bars",
        FetchOutcome::NoData => "no_data",
        FetchOutcome::FetchFailed(_) => "fetch_failed",
    }
}
