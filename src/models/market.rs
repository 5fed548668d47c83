//! Market groups and per-group regime flags.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exchange group a symbol belongs to. One Canadian group (per-symbol
/// historical fetch) and two US groups (batched snapshot fetch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketGroup {
    Tsx,
    Nyse,
    Nasdaq,
}

impl MarketGroup {
    pub const ALL: [MarketGroup; 3] = [MarketGroup::Tsx, MarketGroup::Nyse, MarketGroup::Nasdaq];

    /// Benchmark index whose 200-period trend sets the group's regime flag.
    pub fn benchmark(&self) -> &'static str {
        match self {
            MarketGroup::Tsx => "^GSPTSE",
            MarketGroup::Nyse => "^GSPC",
            MarketGroup::Nasdaq => "^IXIC",
        }
    }

    /// US groups share one batched snapshot call; the Canadian group is
    /// fetched one symbol at a time.
    pub fn is_batched(&self) -> bool {
        !matches!(self, MarketGroup::Tsx)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketGroup::Tsx => "TSX",
            MarketGroup::Nyse => "NYSE",
            MarketGroup::Nasdaq => "NASDAQ",
        }
    }
}

/// Snapshot of per-group regime flags, taken once per scan cycle and passed
/// read-only into every signal evaluation.
#[derive(Debug, Clone, Default)]
pub struct RegimeFlags {
    flags: HashMap<MarketGroup, bool>,
}

impl RegimeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, group: MarketGroup, bullish: bool) {
        self.flags.insert(group, bullish);
    }

    /// Unknown groups default to bullish, matching the regime filter's
    /// insufficient-data fallback.
    pub fn is_bullish(&self, group: MarketGroup) -> bool {
        self.flags.get(&group).copied().unwrap_or(true)
    }
}
