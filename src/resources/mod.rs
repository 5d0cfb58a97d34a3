//! Resource library: a deterministic catalog of study resources per JAMB
//! subject/topic, served through a file-backed cache.

mod cache;
pub mod catalog;

pub use cache::{cache_key, ResourceCache};

use crate::config::AppConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Book,
    Video,
    Practice,
    Course,
    Official,
    Notes,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Book,
        ResourceKind::Video,
        ResourceKind::Practice,
        ResourceKind::Course,
        ResourceKind::Official,
        ResourceKind::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Book => "book",
            ResourceKind::Video => "video",
            ResourceKind::Practice => "practice",
            ResourceKind::Course => "course",
            ResourceKind::Official => "official",
            ResourceKind::Notes => "notes",
        }
    }

    /// Parse a type filter; `"all"` (or empty) means no filter.
    pub fn parse_filter(value: &str) -> Result<Option<Self>, String> {
        let v = value.trim().to_lowercase();
        if v.is_empty() || v == "all" {
            return Ok(None);
        }
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == v)
            .map(Some)
            .ok_or_else(|| format!("unknown resource type {value:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub source: String,
    pub url: String,
    pub description: String,
    /// 0–5
    pub rating: f64,
}

/// Resources for a subject (by display name) and optional topic.
/// Unknown subjects yield nothing and are not cached.
pub fn get_resources(
    cache: &mut ResourceCache,
    subject: &str,
    topic: Option<&str>,
) -> Vec<ResourceEntry> {
    let Some(subject) = catalog::subject(subject) else {
        return Vec::new();
    };
    let topic = topic.filter(|t| !t.is_empty());
    let key = cache_key(subject.code, topic);
    if let Some(hit) = cache.get(&key) {
        return hit.to_vec();
    }
    debug!(%key, "resource cache miss");
    let entries = catalog::synthesize(subject, topic);
    cache.insert(key, entries.clone());
    entries
}

pub fn filter_by_kind(
    entries: Vec<ResourceEntry>,
    kind: Option<ResourceKind>,
) -> Vec<ResourceEntry> {
    match kind {
        None => entries,
        Some(k) => entries.into_iter().filter(|e| e.kind == k).collect(),
    }
}

/// Topic list for a subject; empty for unknown subjects.
pub fn topics(subject: &str) -> &'static [&'static str] {
    catalog::subject(subject).map(|s| s.topics).unwrap_or(&[])
}

/// Cache plus its file location: loaded on open, persisted on shutdown.
#[derive(Debug)]
pub struct ResourceLibrary {
    cache: ResourceCache,
    cache_path: PathBuf,
}

impl ResourceLibrary {
    pub fn open(config: &AppConfig) -> Self {
        let cache_path = config.cache_path();
        let cache = ResourceCache::load(&cache_path, Duration::from_secs(config.cache.ttl_secs));
        Self { cache, cache_path }
    }

    pub fn with_cache(cache: ResourceCache, cache_path: PathBuf) -> Self {
        Self { cache, cache_path }
    }

    pub fn get_resources(&mut self, subject: &str, topic: Option<&str>) -> Vec<ResourceEntry> {
        get_resources(&mut self.cache, subject, topic)
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    /// Save on shutdown; an empty cache is not written.
    pub fn persist(&mut self) {
        if self.cache.is_empty() {
            return;
        }
        self.cache.save(&self.cache_path);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResource {
    #[serde(flatten)]
    pub entry: ResourceEntry,
    pub subject: String,
    pub topic: String,
}

/// A user's saved list, deduplicated by title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedResources {
    items: Vec<SavedResource>,
}

impl SavedResources {
    /// Returns false if a resource with the same title is already saved.
    pub fn save(&mut self, entry: ResourceEntry, subject: &str, topic: Option<&str>) -> bool {
        if self.items.iter().any(|s| s.entry.title == entry.title) {
            return false;
        }
        self.items.push(SavedResource {
            entry,
            subject: subject.to_string(),
            topic: topic.unwrap_or("General").to_string(),
        });
        true
    }

    /// Look a title up in the current subject/topic listing and save it.
    pub fn save_by_title(
        &mut self,
        library: &mut ResourceLibrary,
        title: &str,
        subject: &str,
        topic: Option<&str>,
    ) -> bool {
        let found = library
            .get_resources(subject, topic)
            .into_iter()
            .find(|e| e.title == title);
        match found {
            Some(entry) => self.save(entry, subject, topic),
            None => false,
        }
    }

    pub fn items(&self) -> &[SavedResource] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
