//! End-to-end scan cycle against mocked vendor endpoints

use northscan::regime::RegimeCache;
use northscan::scan::ScanOrchestrator;
use northscan::services::{ChartProvider, SnapshotProvider};
use northscan::universe::Universe;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Zigzag uptrend closes that satisfy every scoring condition (score 100
/// under a bullish regime).
fn qualifying_closes() -> Vec<f64> {
    let mut closes = vec![100.0];
    for i in 0..41 {
        let delta = if i % 2 == 0 { 1.0 } else { -0.5 };
        closes.push(closes.last().unwrap() + delta);
    }
    closes
}

/// Strictly rising closes: RSI pins at 100, so the score lands on 70.
fn rising_closes() -> Vec<f64> {
    (0..35).map(|i| 100.0 + i as f64).collect()
}

fn snapshot_body_for(ticker: &str, closes: &[f64]) -> serde_json::Value {
    let aggregates: Vec<serde_json::Value> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            json!({
                "o": c,
                "h": c + 0.5,
                "l": c - 0.5,
                "c": c,
                "v": 1000.0,
                "t": 1_700_000_000_000i64 + (i as i64) * 300_000
            })
        })
        .collect();
    json!({ "tickers": [{ "ticker": ticker, "day": { "aggregates": aggregates } }] })
}

fn chart_body_for(closes: &[f64]) -> serde_json::Value {
    let timestamps: Vec<i64> = (0..closes.len() as i64).map(|i| 1_700_000_000 + i * 300).collect();
    json!({
        "chart": {
            "result": [{
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "open": closes,
                        "high": closes.iter().map(|c| c + 0.5).collect::<Vec<f64>>(),
                        "low": closes.iter().map(|c| c - 0.5).collect::<Vec<f64>>(),
                        "close": closes,
                        "volume": vec![1000.0; closes.len()]
                    }]
                }
            }]
        }
    })
}

#[tokio::test]
async fn full_cycle_ranks_across_groups() {
    let polygon = MockServer::start().await;
    let chart = MockServer::start().await;

    // NYSE snapshot: AAA qualifies fully, BBB is requested but omitted
    // from the response.
    Mock::given(method("GET"))
        .and(path("/v2/snapshot/locale/us/markets/stocks/tickers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(snapshot_body_for("AAA", &qualifying_closes())),
        )
        .mount(&polygon)
        .await;

    // Every chart request (TSX intraday and benchmark dailies) gets a
    // 35-bar rising series: score 70 intraday, bullish fallback for the
    // regime filter (fewer than 200 daily bars).
    Mock::given(method("GET"))
        .and(path_regex(r"^/v8/finance/chart/.*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body_for(&rising_closes())))
        .mount(&chart)
        .await;

    let snapshot_provider = Arc::new(SnapshotProvider::new(polygon.uri(), "test-key"));
    let chart_provider = Arc::new(ChartProvider::new(chart.uri()));
    let regime = Arc::new(RegimeCache::new(
        chart_provider.clone(),
        Duration::from_secs(300),
    ));

    let universe = Universe::with_groups(
        vec!["SHOP.TO".to_string()],
        vec!["AAA".to_string(), "BBB".to_string()],
        Vec::new(),
    );

    let orchestrator = ScanOrchestrator::new(
        snapshot_provider,
        chart_provider,
        regime,
        universe,
        10,
    );
    let report = orchestrator.scan().await;

    let ranked: Vec<(&str, i32)> = report
        .results
        .iter()
        .map(|r| (r.symbol.as_str(), r.score))
        .collect();
    assert_eq!(ranked, vec![("AAA", 100), ("SHOP.TO", 70)]);
    assert_eq!(report.no_data, 1, "omitted BBB counts as no data");
    assert_eq!(report.fetch_failures, 0);

    // Stop and target follow the flat 1.0 range ATR.
    let top = &report.results[0];
    assert!((top.entry - top.stop - 1.0).abs() < 1e-9);
    assert!((top.target - top.entry - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn provider_outage_yields_empty_report_not_error() {
    let polygon = MockServer::start().await;
    let chart = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&polygon)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&chart)
        .await;

    let snapshot_provider = Arc::new(SnapshotProvider::new(polygon.uri(), "test-key"));
    let chart_provider = Arc::new(ChartProvider::new(chart.uri()));
    let regime = Arc::new(RegimeCache::new(
        chart_provider.clone(),
        Duration::from_secs(300),
    ));

    let universe = Universe::with_groups(
        vec!["SHOP.TO".to_string()],
        vec!["AAA".to_string()],
        Vec::new(),
    );

    let orchestrator = ScanOrchestrator::new(
        snapshot_provider,
        chart_provider,
        regime,
        universe,
        10,
    );
    let report = orchestrator.scan().await;

    assert!(report.is_empty());
    assert_eq!(report.fetch_failures, 2);
}
