// shared/src/lib.rs

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("store unavailable at {}: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("save interval must be greater than zero")]
    InvalidInterval,
    #[error("persistence already started")]
    PersistenceAlreadyStarted,
    #[error("persistence task: {0}")]
    PersistenceTask(String),
}

impl Error {
    pub fn store_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    /// True when the backing file does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::StoreUnavailable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_is_not_found() {
        let missing = Error::store_unavailable(
            "tmp/data.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(missing.is_not_found());
        assert!(missing.to_string().contains("tmp/data.json"));

        let denied = Error::store_unavailable(
            "tmp/data.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!denied.is_not_found());
        assert!(!Error::PersistenceAlreadyStarted.is_not_found());
    }
}
