use crate::domain::Snapshot;
use crate::ports::SnapshotStore;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use shared::{Error, Result};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// JSON file persistence for the cache snapshot
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(snapshot: &Snapshot) -> Result<Vec<u8>> {
        // Sorted keys keep successive snapshots diffable
        let ordered: BTreeMap<&String, &String> = snapshot.iter().collect();

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
        ordered.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl SnapshotStore for JsonFileStore {
    fn read_all(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| Error::store_unavailable(&self.path, e))
    }

    /// Overwrites the file, creating parent directories if they don't exist
    fn write_all(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes = Self::encode(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::store_unavailable(parent, e))?;
        }

        fs::write(&self.path, bytes).map_err(|e| Error::store_unavailable(&self.path, e))
    }

    fn truncate(&self) -> Result<()> {
        OpenOptions::new()
            .write(true)
            .open(&self.path)
            .and_then(|file| file.set_len(0))
            .map_err(|e| Error::store_unavailable(&self.path, e))
    }
}
