//! Bar source interfaces shared by all providers.

use crate::models::{Bar, MarketGroup};
use std::collections::HashMap;

/// Per-symbol fetch outcome.
///
/// "No data" and "fetch failed" are deliberately distinct: a symbol the
/// provider knows nothing about is not the same as a broken scan cycle,
/// and the orchestrator counts and logs the two separately.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Bars(Vec<Bar>),
    NoData,
    FetchFailed(String),
}

impl FetchOutcome {
    pub fn bars(&self) -> Option<&[Bar]> {
        match self {
            FetchOutcome::Bars(bars) => Some(bars),
            _ => None,
        }
    }
}

/// A source of recent intraday bars for a set of symbols in one market group.
///
/// Implementations decide the fetch shape: the snapshot provider issues one
/// batched call for the whole list, the chart provider one call per symbol.
/// The returned map always has an entry for every requested symbol.
#[async_trait::async_trait]
pub trait BarSource: Send + Sync {
    async fn fetch(
        &self,
        symbols: &[String],
        group: MarketGroup,
    ) -> HashMap<String, FetchOutcome>;
}

/// Daily-resolution bar source used by the index trend filter.
#[async_trait::async_trait]
pub trait TrendBarSource: Send + Sync {
    /// Fetch roughly `months` months of daily bars, ascending.
    async fn fetch_daily(
        &self,
        symbol: &str,
        months: u32,
    ) -> Result<Vec<Bar>, Box<dyn std::error::Error + Send + Sync>>;
}
