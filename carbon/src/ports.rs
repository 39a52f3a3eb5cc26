#![deny(clippy::all)]

use crate::domain::Snapshot;
use shared::Result;
use std::fmt::Debug;

// Ports are the pluggable extension points for durable storage

/// Port for the durable copy of the cache.
/// Implementations only marshal bytes; they know nothing about cache semantics.
pub trait SnapshotStore: Debug + Send + Sync + 'static {
    /// Read the whole persisted snapshot
    fn read_all(&self) -> Result<Vec<u8>>;

    /// Overwrite the persisted snapshot with `snapshot`
    fn write_all(&self, snapshot: &Snapshot) -> Result<()>;

    /// Empty the persisted snapshot
    fn truncate(&self) -> Result<()>;
}
