//! JSON-file adapter for the [`WatchedStore`] port.
//!
//! One JSON document maps user ids to their watched entries. The whole
//! document is held in memory behind a lock and rewritten on every add,
//! which is plenty for a per-person assistant. Set semantics are enforced
//! on both load and add: a movie id appears at most once per user even if
//! the file on disk says otherwise.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reelbot_application::{StoreError, WatchedStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

/// One watched movie, with the moment it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WatchedEntry {
    movie_id: u64,
    added_at: DateTime<Utc>,
}

type WatchedMap = HashMap<String, Vec<WatchedEntry>>;

/// File-backed watched store.
pub struct JsonWatchedStore {
    path: PathBuf,
    entries: Mutex<WatchedMap>,
}

impl JsonWatchedStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| StoreError::Storage(e.to_string()))?;
            let mut loaded: WatchedMap =
                serde_json::from_str(&raw).map_err(|e| StoreError::Storage(e.to_string()))?;
            for list in loaded.values_mut() {
                dedup_entries(list);
            }
            loaded
        } else {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Storage(e.to_string()))?;
            }
            WatchedMap::new()
        };

        info!("Watched store at {}", path.display());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &WatchedMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::Storage(e.to_string()))
    }
}

/// Keep the first occurrence of each movie id.
fn dedup_entries(list: &mut Vec<WatchedEntry>) {
    let mut seen = std::collections::HashSet::new();
    list.retain(|e| seen.insert(e.movie_id));
}

#[async_trait]
impl WatchedStore for JsonWatchedStore {
    async fn add(&self, user_id: &str, movie_id: u64) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        let list = entries.entry(user_id.to_string()).or_default();
        if list.iter().any(|e| e.movie_id == movie_id) {
            return Ok(());
        }
        list.push(WatchedEntry {
            movie_id,
            added_at: Utc::now(),
        });
        self.persist(&entries)
    }

    async fn list(&self, user_id: &str) -> Result<Vec<u64>, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(user_id)
            .map(|list| list.iter().map(|e| e.movie_id).collect())
            .unwrap_or_default())
    }

    async fn is_watched(&self, user_id: &str, movie_id: u64) -> Result<bool, StoreError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(user_id)
            .is_some_and(|list| list.iter().any(|e| e.movie_id == movie_id)))
    }
}
