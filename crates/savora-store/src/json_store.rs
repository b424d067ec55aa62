//! Directory-rooted JSON key-value store.
//!
//! Each key maps to one file, `<root>/<key>.json`, holding a JSON array.
//! Reads return `None` for an absent key so callers can distinguish
//! "never initialized" (seed) from "initialized and empty". Writes are
//! atomic (temp file + rename) so a crashed write never leaves a torn
//! collection, though concurrent writers still race last-write-wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use savora_core::{defaults, Result};

/// File-backed key-value store for JSON collections.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
    latency: Duration,
}

impl JsonStore {
    /// Create a store rooted at `root` with the default simulated latency.
    ///
    /// The latency keeps loading-state behavior realistic for embedding
    /// shells; tests should use [`JsonStore::with_latency`] with
    /// `Duration::ZERO`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            latency: Duration::from_millis(defaults::SIMULATED_LATENCY_MS),
        }
    }

    /// Override the simulated per-operation latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Directory this store reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Read the collection stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        self.simulate_latency().await;

        let path = self.path_for(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "json_store: key not initialized");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let items: Vec<T> = serde_json::from_slice(&bytes)?;
        debug!(key, count = items.len(), "json_store: read");
        Ok(Some(items))
    }

    /// Write the full collection under `key`, replacing any prior value.
    pub async fn set<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        self.simulate_latency().await;

        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                warn!(parent = %parent.display(), error = %e, "json_store: create_dir_all failed");
                e
            })?;
        }

        let payload = serde_json::to_vec_pretty(items)?;

        // Atomic write: temp file + rename
        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            warn!(temp_path = %temp_path.display(), error = %e, "json_store: create failed");
            e
        })?;
        file.write_all(&payload).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &path).await.map_err(|e| {
            warn!(from = %temp_path.display(), to = %path.display(), error = %e, "json_store: rename failed");
            e
        })?;

        debug!(key, count = items.len(), size = payload.len(), "json_store: write");
        Ok(())
    }
}
