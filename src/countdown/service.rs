/// Day-rollover driven countdown refresh
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};

use super::engine::HolidayCountdownEngine;
use super::message::CountdownReport;
use crate::time::{Clock, DayRollover};

/// Recomputes the countdown whenever the clock reaches a new day
pub struct CountdownService {
    engine: HolidayCountdownEngine,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
    tx: watch::Sender<Option<CountdownReport>>,
}

impl CountdownService {
    pub fn new(engine: HolidayCountdownEngine, clock: Arc<dyn Clock>, poll_interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        CountdownService {
            engine,
            clock,
            poll_interval,
            tx,
        }
    }

    /// Receiver holding the latest report, `None` until the first refresh
    pub fn subscribe(&self) -> watch::Receiver<Option<CountdownReport>> {
        self.tx.subscribe()
    }

    /// Publish a fresh report if the day changed since the last call
    pub fn refresh(&self, rollover: &mut DayRollover) -> Option<CountdownReport> {
        let date = rollover.observe(self.clock.today())?;
        let report = self.engine.report(date);

        info!("📅 Countdown for {}: {} message(s)", date, report.messages.len());
        self.tx.send_replace(Some(report.clone()));
        Some(report)
    }

    /// Poll the clock until the shutdown flag is set
    pub async fn run(&self, shutdown: Arc<RwLock<bool>>) {
        info!("Countdown service started (poll every {:?})", self.poll_interval);
        let mut rollover = DayRollover::new();

        loop {
            if *shutdown.read().await {
                info!("Countdown service stopping");
                break;
            }

            if self.refresh(&mut rollover).is_none() {
                debug!("No day change");
            }

            wait_or_shutdown(self.poll_interval, &shutdown).await;
        }
    }
}

/// Upper bound on how long a set shutdown flag goes unnoticed
const SHUTDOWN_CHECK: Duration = Duration::from_millis(250);

/// Sleep for `period` in short slices, returning early once shutdown is set
async fn wait_or_shutdown(period: Duration, shutdown: &RwLock<bool>) {
    let mut remaining = period;
    while !remaining.is_zero() {
        let step = remaining.min(SHUTDOWN_CHECK);
        tokio::time::sleep(step).await;
        remaining -= step;

        if *shutdown.read().await {
            return;
        }
    }
}
