use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{AppState, EditorContext};
use crate::util::time;

/// Errors that can occur during state persistence operations
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize state: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write state: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read state file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// How much of each image's history is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PersistencePolicy {
    /// past, present and future of every image
    #[default]
    FullHistory,
    /// only the present state; undo starts empty after a load
    PresentOnly,
}

/// Serializable copy of the editing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub state: AppState,
    /// Seconds since the UNIX epoch when the snapshot was taken
    pub timestamp: u64,
    /// Version of the application when the snapshot was taken
    pub version: String,
}

impl EditorSnapshot {
    pub fn new(ctx: &EditorContext, policy: PersistencePolicy) -> Self {
        let mut state = ctx.state().clone();
        if policy == PersistencePolicy::PresentOnly {
            for image in &mut state.images {
                image.history.clear();
            }
        }
        Self {
            state,
            timestamp: time::timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Replace the context's session with this snapshot. The line editor is reset.
    pub fn restore(self, ctx: &mut EditorContext) {
        if self.version != env!("CARGO_PKG_VERSION") {
            warn!(
                "Snapshot version {} differs from current version {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        ctx.replace_state(self.state);
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Saves and loads named snapshots as JSON files in one directory
#[derive(Debug, Clone)]
pub struct StatePersistence {
    state_dir: PathBuf,
    policy: PersistencePolicy,
}

impl StatePersistence {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            policy: PersistencePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PersistencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.state_dir.join(format!("{name}.json"))
    }

    pub fn save_snapshot(&self, ctx: &EditorContext, name: &str) -> PersistenceResult<()> {
        let snapshot = EditorSnapshot::new(ctx, self.policy);
        fs::create_dir_all(&self.state_dir)?;
        let path = self.snapshot_path(name);
        fs::write(&path, snapshot.to_json()?)?;
        info!("Saved {} images to {}", snapshot.state.images.len(), path.display());
        Ok(())
    }

    pub fn load_snapshot(&self, name: &str) -> PersistenceResult<EditorSnapshot> {
        let path = self.snapshot_path(name);
        let json = fs::read_to_string(&path)
            .map_err(|source| PersistenceError::ReadError { path: path.clone(), source })?;
        let snapshot = EditorSnapshot::from_json(&json)?;
        info!("Loaded {} images from {}", snapshot.state.images.len(), path.display());
        Ok(snapshot)
    }
}
