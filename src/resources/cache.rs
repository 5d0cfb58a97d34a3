//! JSON-file cache of synthesized resource lists.
//!
//! File shape: `{"timestamp": <epoch secs>, "resources": {"<key>": [entry, ...]}}`.
//! Expiry is whole-file: a file older than the TTL is discarded entirely.

use super::ResourceEntry;
use crate::error::CacheError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    timestamp: f64,
    #[serde(default)]
    resources: BTreeMap<String, Vec<ResourceEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceCache {
    entries: BTreeMap<String, Vec<ResourceEntry>>,
    /// Epoch seconds of the last successful save (or of the file loaded)
    persisted_at: Option<f64>,
}

fn epoch_secs(t: DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64 / 1000.0
}

/// `<subject_code>_<topic>` or `<subject_code>_all`
pub fn cache_key(subject_code: &str, topic: Option<&str>) -> String {
    format!("{}_{}", subject_code, topic.unwrap_or("all"))
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&[ResourceEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: String, entries: Vec<ResourceEntry>) {
        self.entries.insert(key, entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn persisted_at(&self) -> Option<f64> {
        self.persisted_at
    }

    /// Load the cache file; missing, corrupt or stale files yield an empty cache.
    pub fn load(path: &Path, ttl: Duration) -> Self {
        Self::load_at(path, ttl, Utc::now())
    }

    pub fn load_at(path: &Path, ttl: Duration, now: DateTime<Utc>) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no resource cache file");
            return Self::new();
        }
        match Self::try_load_at(path, ttl, now) {
            Ok(cache) => {
                info!(path = %path.display(), keys = cache.len(), "resource cache loaded");
                cache
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "resource cache discarded");
                Self::new()
            }
        }
    }

    pub fn try_load_at(path: &Path, ttl: Duration, now: DateTime<Utc>) -> Result<Self, CacheError> {
        let data = std::fs::read_to_string(path)?;
        let file: CacheFile = serde_json::from_str(&data)?;
        let age_secs = epoch_secs(now) - file.timestamp;
        if age_secs >= ttl.as_secs_f64() {
            return Err(CacheError::Stale { age_secs });
        }
        Ok(Self {
            entries: file.resources,
            persisted_at: Some(file.timestamp),
        })
    }

    /// Write the whole cache with the current timestamp. Failures are logged only.
    pub fn save(&mut self, path: &Path) {
        self.save_at(path, Utc::now());
    }

    pub fn save_at(&mut self, path: &Path, now: DateTime<Utc>) {
        match self.try_save_at(path, now) {
            Ok(()) => info!(path = %path.display(), keys = self.len(), "resource cache saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "resource cache save failed"),
        }
    }

    pub fn try_save_at(&mut self, path: &Path, now: DateTime<Utc>) -> Result<(), CacheError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let timestamp = epoch_secs(now);
        let file = CacheFile {
            timestamp,
            resources: self.entries.clone(),
        };
        std::fs::write(path, serde_json::to_string(&file)?)?;
        self.persisted_at = Some(timestamp);
        Ok(())
    }
}
