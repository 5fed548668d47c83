//! Index trend filter with a short TTL cache.
//!
//! A market group is "bullish" when its benchmark index closed above its
//! 200-period EMA over daily bars. The flag is a regime adjustment fed into
//! scoring as a penalty, not a hard gate, so every fallback here leans
//! bullish: too few bars or a failed fetch both default to true.

use crate::common::math;
use crate::models::{MarketGroup, RegimeFlags};
use crate::services::market_data::TrendBarSource;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const TREND_EMA_SPAN: usize = 200;
const TREND_RANGE_MONTHS: u32 = 6;

struct CachedFlag {
    bullish: bool,
    computed_at: Instant,
}

pub struct RegimeCache {
    source: Arc<dyn TrendBarSource>,
    ttl: Duration,
    flags: RwLock<HashMap<MarketGroup, CachedFlag>>,
}

impl RegimeCache {
    pub fn new(source: Arc<dyn TrendBarSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            flags: RwLock::new(HashMap::new()),
        }
    }

    /// Regime flag for one group, recomputing only when the cached value
    /// has outlived the TTL. Recomputing a daily-resolution trend on every
    /// 60-second scan cycle would be wasted work.
    pub async fn bullish(&self, group: MarketGroup) -> bool {
        {
            let flags = self.flags.read().await;
            if let Some(cached) = flags.get(&group) {
                if cached.computed_at.elapsed() < self.ttl {
                    return cached.bullish;
                }
            }
        }

        let bullish = self.compute(group).await;
        let mut flags = self.flags.write().await;
        flags.insert(
            group,
            CachedFlag {
                bullish,
                computed_at: Instant::now(),
            },
        );
        bullish
    }

    /// Snapshot all groups into one read-only flag set for a scan cycle.
    pub async fn flags_for(&self, groups: &[MarketGroup]) -> RegimeFlags {
        let mut snapshot = RegimeFlags::new();
        for &group in groups {
            snapshot.set(group, self.bullish(group).await);
        }
        snapshot
    }

    async fn compute(&self, group: MarketGroup) -> bool {
        let benchmark = group.benchmark();
        let bars = match self.source.fetch_daily(benchmark, TREND_RANGE_MONTHS).await {
            Ok(bars) => bars,
            Err(e) => {
                warn!(benchmark = benchmark, error = %e, "trend fetch failed, defaulting to bullish");
                return true;
            }
        };

        if bars.len() < TREND_EMA_SPAN {
            debug!(
                benchmark = benchmark,
                count = bars.len(),
                "fewer than {} daily bars, defaulting to bullish",
                TREND_EMA_SPAN
            );
            return true;
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let last_close = *closes.last().unwrap_or(&0.0);
        let bullish = match math::ema(&closes, TREND_EMA_SPAN) {
            Some(ema) => last_close > ema,
            None => true,
        };

        info!(
            benchmark = benchmark,
            group = group.label(),
            bullish = bullish,
            "regime flag recomputed"
        );
        bullish
    }
}
