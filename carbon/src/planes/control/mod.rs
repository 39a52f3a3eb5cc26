pub mod bootstrap;
pub mod persistence_scheduler;

pub use bootstrap::{BootstrapOutcome, bootstrap};
pub use persistence_scheduler::{PersistenceHandle, PersistenceScheduler};
