// carbon/src/lib.rs
pub mod domain;
pub mod persistence;
pub mod planes;
pub mod ports;

// Re-export the types every caller wires together
pub use domain::{GetResponse, Snapshot};
pub use persistence::JsonFileStore;
pub use planes::control::{BootstrapOutcome, PersistenceHandle, PersistenceScheduler, bootstrap};
pub use planes::data::CacheEngine;
pub use ports::SnapshotStore;
