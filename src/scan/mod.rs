//! Scan orchestration: one full pass over the symbol universe.

use crate::models::{MarketGroup, SignalResult};
use crate::regime::RegimeCache;
use crate::services::market_data::{BarSource, FetchOutcome};
use crate::signals::SignalEngine;
use crate::universe::Universe;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one scan cycle.
///
/// An empty `results` vector means no symbol qualified, which is an
/// informational state, not an error. `no_data` and `fetch_failures` keep
/// "symbol has nothing to score" distinguishable from "provider is broken".
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub results: Vec<SignalResult>,
    pub no_data: usize,
    pub fetch_failures: usize,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub struct ScanOrchestrator {
    us_source: Arc<dyn BarSource>,
    ca_source: Arc<dyn BarSource>,
    regime: Arc<RegimeCache>,
    universe: Universe,
    top_n: usize,
}

impl ScanOrchestrator {
    pub fn new(
        us_source: Arc<dyn BarSource>,
        ca_source: Arc<dyn BarSource>,
        regime: Arc<RegimeCache>,
        universe: Universe,
        top_n: usize,
    ) -> Self {
        Self {
            us_source,
            ca_source,
            regime,
            universe,
            top_n,
        }
    }

    /// Run one scan cycle: fetch, score, rank, truncate to top N.
    pub async fn scan(&self) -> ScanReport {
        let regime_flags = self.regime.flags_for(&MarketGroup::ALL).await;
        let mut report = ScanReport::default();

        for group in MarketGroup::ALL {
            let symbols = self.universe.symbols(group);
            if symbols.is_empty() {
                continue;
            }

            let source = if group.is_batched() {
                &self.us_source
            } else {
                &self.ca_source
            };
            let mut outcomes = source.fetch(symbols, group).await;
            let bullish = regime_flags.is_bullish(group);

            // Symbols are walked in universe order so that ranking ties
            // resolve by input iteration order.
            for symbol in symbols {
                match outcomes.remove(symbol) {
                    Some(FetchOutcome::Bars(bars)) => {
                        if let Some(result) = SignalEngine::evaluate(symbol, &bars, bullish) {
                            report.results.push(result);
                        } else {
                            debug!(symbol = %symbol, count = bars.len(), "series too short, skipping");
                        }
                    }
                    Some(FetchOutcome::NoData) | None => {
                        report.no_data += 1;
                    }
                    Some(FetchOutcome::FetchFailed(reason)) => {
                        warn!(symbol = %symbol, group = group.label(), reason = %reason, "fetch failed");
                        report.fetch_failures += 1;
                    }
                }
            }
        }

        // Stable sort keeps input order among equal scores.
        report.results.sort_by(|a, b| b.score.cmp(&a.score));
        report.results.truncate(self.top_n);

        if report.is_empty() {
            info!(
                no_data = report.no_data,
                fetch_failures = report.fetch_failures,
                "scan cycle complete, no qualifying symbols"
            );
        } else {
            info!(
                ranked = report.results.len(),
                no_data = report.no_data,
                fetch_failures = report.fetch_failures,
                "scan cycle complete"
            );
        }

        report
    }
}
