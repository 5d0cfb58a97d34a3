//! Application configuration. Loaded once at startup from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Data directory (resource cache, processed dataset)
    pub data_dir: PathBuf,
    /// Upstream exam-performance table, read-only
    pub dataset_path: PathBuf,
    /// Pre-trained model artifacts
    pub models: ModelsConfig,
    /// Risk band thresholds on the predicted score
    pub risk: RiskConfig,
    /// Resource library cache
    pub cache: CacheConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    pub dir: PathBuf,
    pub scorer_artifact: String,
    pub classifier_artifact: String,
    /// Optional ONNX regressor used in place of the JSON scorer (`onnx` feature)
    pub onnx_scorer: Option<String>,
    /// Substitute the heuristic model when an artifact is missing
    pub heuristic_fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Scores at or above this are low risk
    pub low_threshold: f64,
    /// Scores at or above this (and below `low_threshold`) are medium risk
    pub medium_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache file name, relative to `data_dir` unless absolute
    pub file: PathBuf,
    /// Whole-file expiry in seconds
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            dataset_path: PathBuf::from("data/processed/jamb_enhanced.csv"),
            models: ModelsConfig::default(),
            risk: RiskConfig::default(),
            cache: CacheConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("models"),
            scorer_artifact: "jamb_xgb_regressor.json".to_string(),
            classifier_artifact: "jamb_pass_classifier.json".to_string(),
            onnx_scorer: None,
            heuristic_fallback: false,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            low_threshold: 250.0,
            medium_threshold: 200.0,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("resources_cache.json"),
            ttl_secs: 24 * 60 * 60,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ModelsConfig {
    pub fn scorer_path(&self) -> PathBuf {
        self.dir.join(&self.scorer_artifact)
    }

    pub fn classifier_path(&self) -> PathBuf {
        self.dir.join(&self.classifier_artifact)
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AppConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    pub fn cache_path(&self) -> PathBuf {
        if self.cache.file.is_absolute() {
            self.cache.file.clone()
        } else {
            self.data_dir.join(&self.cache.file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"risk":{"low_threshold":260.0},"log":{"json":true}}"#).unwrap();
        let c = AppConfig::load(&path);
        assert_eq!(c.risk.low_threshold, 260.0);
        assert_eq!(c.risk.medium_threshold, 200.0);
        assert!(c.log.json);
        assert_eq!(c.log.level, "info");
        assert_eq!(c.cache.ttl_secs, 86_400);
    }

    #[test]
    fn invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let c = AppConfig::load(&path);
        assert_eq!(c.models.scorer_artifact, "jamb_xgb_regressor.json");
    }

    #[test]
    fn cache_path_is_relative_to_data_dir() {
        let c = AppConfig::default();
        assert_eq!(c.cache_path(), PathBuf::from("data/resources_cache.json"));
    }
}
