// Snapshot persistence for the room registry
// The whole registry is written as one JSON document and read back on the next start

use crate::registry::RoomRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const SNAPSHOT_VERSION: u32 = 1;

// Error types for snapshot handling
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error on snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Snapshot {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    registry: &'a RoomRegistry,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    version: u32,
    saved_at: DateTime<Utc>,
    registry: RoomRegistry,
}

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: impl Into<String>) -> PersistenceError {
        PersistenceError::Corrupt {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    // Missing snapshot means first run: hand back an empty hotel
    pub fn load(&self) -> Result<RoomRegistry, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no snapshot found, starting with all rooms vacant");
                return Ok(RoomRegistry::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|e| self.corrupt(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(self.corrupt(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        snapshot
            .registry
            .validate()
            .map_err(|e| self.corrupt(e.to_string()))?;

        info!(path = %self.path.display(), saved_at = %snapshot.saved_at, "snapshot loaded");
        Ok(snapshot.registry)
    }

    // Writes next to the target and renames over it, so a crash never leaves half a snapshot
    pub fn save(&self, registry: &RoomRegistry) -> Result<(), PersistenceError> {
        let snapshot = SnapshotRef {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            registry,
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, bytes).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }
}
