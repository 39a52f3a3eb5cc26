use crate::planes::data::CacheEngine;
use shared::Error;
use tracing::{info, warn};

#[derive(Debug)]
pub enum BootstrapOutcome {
    /// Store loaded, with the resulting entry count
    Loaded(usize),
    /// Nothing usable on disk; the cache starts empty
    StartedEmpty(Error),
}

impl BootstrapOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, BootstrapOutcome::Loaded(_))
    }
}

/// Hydrate the engine from its store once, before serving traffic and before
/// persistence starts. Never fails: a missing, empty or corrupt file leaves the
/// cache empty.
pub fn bootstrap(engine: &CacheEngine) -> BootstrapOutcome {
    match engine.load_from_store() {
        Ok(()) => {
            let entries = engine.len();
            info!(entries, "Cache hydrated from store");
            BootstrapOutcome::Loaded(entries)
        }
        Err(e) if e.is_not_found() => {
            info!(error = %e, "No snapshot on disk yet, starting with an empty cache");
            BootstrapOutcome::StartedEmpty(e)
        }
        Err(e) => {
            warn!(error = %e, "Failed to load snapshot, starting with an empty cache");
            BootstrapOutcome::StartedEmpty(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GetResponse;
    use crate::persistence::JsonFileStore;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    fn engine_at(path: &Path) -> CacheEngine {
        CacheEngine::new(Arc::new(JsonFileStore::new(path)))
    }

    #[test]
    fn test_bootstrap_loads_existing_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "{\n \"name\": \"value\"\n}").unwrap();

        let engine = engine_at(&path);
        let outcome = bootstrap(&engine);

        assert!(matches!(outcome, BootstrapOutcome::Loaded(1)));
        assert_eq!(engine.get("name"), GetResponse::hit("value"));
    }

    #[test]
    fn test_bootstrap_tolerates_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let engine = engine_at(&temp_dir.path().join("missing.json"));

        match bootstrap(&engine) {
            BootstrapOutcome::StartedEmpty(e) => assert!(e.is_not_found()),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(engine.is_empty());
    }

    #[test]
    fn test_bootstrap_tolerates_corrupt_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();

        let engine = engine_at(&path);
        let outcome = bootstrap(&engine);

        assert!(!outcome.is_loaded());
        assert!(engine.is_empty());
    }

    #[test]
    fn test_empty_file_scenario() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, b"").unwrap();

        let engine = engine_at(&path);
        assert!(!bootstrap(&engine).is_loaded());
        assert!(engine.is_empty());

        engine.set("x", "y");
        assert_eq!(engine.get("x"), GetResponse::hit("y"));

        engine.delete("x");
        assert_eq!(engine.get("x"), GetResponse::miss());
    }
}
