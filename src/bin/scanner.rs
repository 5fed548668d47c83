//! Northscan Scanner
//!
//! Runs the intraday scan loop: fetch bars for the configured universe,
//! score and rank symbols, and print the refreshed table on every tick.

use dotenvy::dotenv;
use northscan::config::{self, ScannerConfig};
use northscan::core::{ScanScheduler, ScanSink};
use northscan::logging;
use northscan::regime::RegimeCache;
use northscan::scan::{ScanOrchestrator, ScanReport};
use northscan::services::{ChartProvider, SnapshotProvider};
use northscan::universe::Universe;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

/// Renders the ranked table to stdout.
struct TableSink;

impl ScanSink for TableSink {
    fn publish(&self, report: &ScanReport) {
        if report.is_empty() {
            println!(
                "No qualifying symbols this cycle ({} without data, {} fetch failures)",
                report.no_data, report.fetch_failures
            );
            return;
        }

        println!(
            "{:<10} {:>6} {:>10} {:>12} {:>10}",
            "Symbol", "Score", "Buy", "Sell Target", "Stop Loss"
        );
        for result in &report.results {
            println!(
                "{:<10} {:>6} {:>10.2} {:>12.2} {:>10.2}",
                result.symbol, result.score, result.entry, result.target, result.stop
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let settings = ScannerConfig::from_env();
    let env = config::get_environment();
    info!("Starting Northscan Scanner");
    info!(environment = %env, "Environment");
    info!(
        refresh = settings.refresh_seconds,
        top_n = settings.top_n,
        "Scan: every {} seconds, top {}",
        settings.refresh_seconds,
        settings.top_n
    );

    let universe = Universe::load(&settings);

    let snapshot = Arc::new(SnapshotProvider::new(
        settings.polygon_base_url.clone(),
        config::get_polygon_api_key(),
    ));
    let chart = Arc::new(ChartProvider::new(settings.chart_base_url.clone()));
    let regime = Arc::new(RegimeCache::new(
        chart.clone(),
        Duration::from_secs(settings.regime_ttl_seconds),
    ));

    let orchestrator = Arc::new(ScanOrchestrator::new(
        snapshot,
        chart,
        regime,
        universe,
        settings.top_n,
    ));

    let scheduler = ScanScheduler::new(orchestrator, Arc::new(TableSink), settings.refresh_seconds)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler.start().await;

    info!("Scanner started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down scanner...");
    scheduler.stop().await;
    info!("Scanner stopped");

    Ok(())
}
