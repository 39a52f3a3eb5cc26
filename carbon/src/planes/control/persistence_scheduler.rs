use crate::planes::data::CacheEngine;
use shared::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Background task that periodically writes the cache snapshot to its store.
///
/// Purely time driven: it is not woken by mutations, and an unchanged cache is
/// still rewritten on every tick. Write failures are logged and retried on the
/// next tick; they never stop the loop.
pub struct PersistenceScheduler {
    engine: Arc<CacheEngine>,
    interval: Duration,
    cancel: CancellationToken,
}

impl PersistenceScheduler {
    /// `interval` must be non-zero; `CacheEngine::start_persistence` checks this.
    pub fn new(engine: Arc<CacheEngine>, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            cancel: CancellationToken::new(),
        }
    }

    /// Arm the ticker and run the loop on the current tokio runtime
    pub fn spawn(self) -> PersistenceHandle {
        let cancel = self.cancel.clone();
        let task = tokio::spawn(self.run());
        PersistenceHandle { cancel, task }
    }

    async fn run(self) {
        // First save happens one full interval after start
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval_ms = self.interval_ms(),
            "Persistence scheduler running"
        );

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => self.save().await,
            }
        }

        info!("Persistence scheduler stopped");
    }

    fn interval_ms(&self) -> u64 {
        u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX)
    }

    async fn save(&self) {
        match self.engine.persist_in_background().await {
            Ok(entries) => info!(entries, "All data added to file"),
            Err(e) => error!(error = %e, "Failed to persist cache, retrying on next tick"),
        }
    }
}

/// Handle to the running persistence loop
#[derive(Debug)]
pub struct PersistenceHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PersistenceHandle {
    /// Fire the one-shot cancellation signal without waiting
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel the loop and wait for it to exit. An in-flight write completes first.
    pub async fn shutdown(self) -> Result<()> {
        self.cancel.cancel();
        self.task
            .await
            .map_err(|e| Error::PersistenceTask(e.to_string()))
    }
}
