use crate::domain::{GetResponse, Snapshot};
use crate::planes::control::{PersistenceHandle, PersistenceScheduler};
use crate::ports::SnapshotStore;
use parking_lot::RwLock;
use shared::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

/// In-memory key/value cache backed by a durable snapshot store.
///
/// A single reader/writer lock guards the whole map: readers run concurrently,
/// any writer excludes everyone else. Only `flush` and `load_from_store` touch
/// the store while holding the lock.
pub struct CacheEngine {
    db: RwLock<HashMap<String, String>>,
    store: Arc<dyn SnapshotStore>,
    persistence_started: AtomicBool,
}

impl Debug for CacheEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheEngine")
            .field("entries", &self.len())
            .field("store", &self.store)
            .finish()
    }
}

impl CacheEngine {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            db: RwLock::new(HashMap::new()),
            store,
            persistence_started: AtomicBool::new(false),
        }
    }

    pub fn get(&self, key: &str) -> GetResponse {
        match self.db.read().get(key) {
            Some(value) => GetResponse::hit(value.clone()),
            None => GetResponse::miss(),
        }
    }

    /// Insert or overwrite unconditionally
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.db.write().insert(key.into(), value.into());
    }

    /// Remove the key if present. Whether it existed is deliberately not reported.
    pub fn delete(&self, key: &str) {
        self.db.write().remove(key);
    }

    /// Clear the map, then truncate the backing file.
    /// The memory clear stays in place even if truncation fails.
    ///
    /// A scheduler tick that snapshotted just before the flush may still write
    /// the old entries back afterwards; the file is only guaranteed to reflect
    /// the cleared map after the next completed tick.
    pub fn flush(&self) -> Result<()> {
        let mut db = self.db.write();
        *db = HashMap::new();
        self.store.truncate()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.db.read().clone()
    }

    pub fn len(&self) -> usize {
        self.db.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.read().is_empty()
    }

    /// Replace the live map with the contents of the store.
    /// On any failure the current map is left untouched.
    pub fn load_from_store(&self) -> Result<()> {
        let mut db = self.db.write();
        let bytes = self.store.read_all()?;
        let loaded: HashMap<String, String> = serde_json::from_slice(&bytes)?;
        debug!(entries = loaded.len(), "Loaded snapshot from store");
        *db = loaded;
        Ok(())
    }

    /// Write the current state through the store, returning the entry count
    pub fn persist(&self) -> Result<usize> {
        let snapshot = self.snapshot();
        self.store.write_all(&snapshot)?;
        Ok(snapshot.len())
    }

    /// `persist` on the blocking pool, for callers on the async runtime
    pub async fn persist_in_background(self: &Arc<Self>) -> Result<usize> {
        let engine = Arc::clone(self);
        tokio::task::spawn_blocking(move || engine.persist())
            .await
            .map_err(|e| Error::PersistenceTask(e.to_string()))?
    }

    /// Start the background persistence loop. Only the first call succeeds;
    /// a stopped scheduler is not restarted.
    pub fn start_persistence(self: &Arc<Self>, interval: Duration) -> Result<PersistenceHandle> {
        if interval.is_zero() {
            return Err(Error::InvalidInterval);
        }

        if self
            .persistence_started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::PersistenceAlreadyStarted);
        }

        Ok(PersistenceScheduler::new(Arc::clone(self), interval).spawn())
    }
}
