//! Read-only cache of the per-category static snapshot files.
//!
//! An out-of-band batch job materializes `{ symbols, names, logs }`
//! blobs under `<SNAPSHOT_DIR>/<urlencoded category>/guess.json` (with
//! `aside.json` as a secondary location). The service treats them
//! purely as a cache with no freshness guarantee beyond "periodically
//! rebuilt", so entries are held in memory for a bounded staleness
//! window and re-read afterwards.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;

use unitconver_db::models::conversion_log::UnitConversionLog;

/// One category's snapshot blob. Unknown JSON fields are ignored and
/// missing fields default to empty, so a half-built file degrades
/// instead of failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategorySnapshot {
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub names: HashMap<String, String>,
    #[serde(default)]
    pub logs: Vec<UnitConversionLog>,
}

/// File names probed per category, in order.
const SNAPSHOT_FILES: &[&str] = &["guess.json", "aside.json"];

struct CacheEntry {
    loaded_at: Instant,
    snapshot: Option<Arc<CategorySnapshot>>,
}

/// TTL'd in-process cache over the snapshot directory.
pub struct SnapshotStore {
    dir: PathBuf,
    ttl: Duration,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The snapshot for a category, or `None` when no readable file
    /// exists. Both hits and misses are cached for the TTL.
    pub async fn get(&self, category: &str) -> Option<Arc<CategorySnapshot>> {
        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(category) {
                if entry.loaded_at.elapsed() < self.ttl {
                    return entry.snapshot.clone();
                }
            }
        }

        let snapshot = self.load(category).await.map(Arc::new);

        let mut cache = self.cache.write().await;
        // Category names come straight from request paths, so the map
        // cannot be allowed to grow with every unique miss. Sweep
        // expired entries while holding the write lock anyway.
        cache.retain(|_, entry| entry.loaded_at.elapsed() < self.ttl);
        cache.insert(
            category.to_string(),
            CacheEntry {
                loaded_at: Instant::now(),
                snapshot: snapshot.clone(),
            },
        );
        snapshot
    }

    /// Read and parse the first snapshot file present for a category.
    async fn load(&self, category: &str) -> Option<CategorySnapshot> {
        let category_dir = self.dir.join(urlencoding::encode(category).as_ref());
        for file in SNAPSHOT_FILES {
            if let Some(snapshot) = read_snapshot_file(&category_dir.join(file)).await {
                return Some(snapshot);
            }
        }
        None
    }
}

async fn read_snapshot_file(path: &Path) -> Option<CategorySnapshot> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(_) => return None,
    };
    match serde_json::from_slice(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Unreadable snapshot file");
            None
        }
    }
}
