//! Cron-based scheduler driving the scan loop.
//!
//! The refresh timer is decoupled from rendering: each tick runs one full
//! scan cycle and hands the report to a [`ScanSink`], so presentation is an
//! external concern of whoever implements the sink.

use crate::scan::{ScanOrchestrator, ScanReport};
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Receiver for completed scan reports (table renderer, test probe, ...).
pub trait ScanSink: Send + Sync {
    fn publish(&self, report: &ScanReport);
}

pub struct ScanScheduler {
    orchestrator: Arc<ScanOrchestrator>,
    sink: Arc<dyn ScanSink>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a scheduler firing every `interval_seconds` (0 = disabled).
    pub fn new(
        orchestrator: Arc<ScanOrchestrator>,
        sink: Arc<dyn ScanSink>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            let minutes = interval_seconds / 60;
            format!("0 */{} * * * *", minutes)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "scheduler created with interval {}s",
            interval_seconds
        );

        Ok(Self {
            orchestrator,
            sink,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the tick loop. Each tick fully completes one scan cycle
    /// before the next sleep; cycles never overlap.
    pub async fn start(&self) {
        let orchestrator = self.orchestrator.clone();
        let sink = self.sink.clone();
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("scheduler started, waiting for first tick");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                debug!("scheduler tick, running scan cycle");
                let report = orchestrator.scan().await;
                sink.publish(&report);
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }

        info!("scheduler running");
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
