//! The pair of models a prediction needs, loaded once at startup.

use super::{HeuristicModel, LinearScorer, LogisticClassifier, PassClassifier, ScoreModel};
use crate::config::ModelsConfig;
use crate::error::ModelError;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{info, warn};

pub const SCORER_NAME: &str = "jamb_xgb_regressor";
pub const CLASSIFIER_NAME: &str = "jamb_pass_classifier";

#[derive(Default)]
pub struct ModelSet {
    pub scorer: Option<Box<dyn ScoreModel>>,
    pub classifier: Option<Box<dyn PassClassifier>>,
}

impl std::fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSet")
            .field("scorer", &self.scorer.as_ref().map(|m| m.name().to_string()))
            .field("classifier", &self.classifier.as_ref().map(|m| m.name().to_string()))
            .finish()
    }
}

/// Hex SHA-256 of an artifact file, logged so identical artifacts can be recognised.
pub fn fingerprint(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

fn log_loaded(kind: &str, path: &Path) {
    match fingerprint(path) {
        Ok(sha256) => info!(model = kind, path = %path.display(), %sha256, "model loaded"),
        Err(e) => {
            warn!(model = kind, path = %path.display(), error = %e, "model fingerprint failed");
        }
    }
}

#[cfg(feature = "onnx")]
fn load_onnx_scorer(config: &ModelsConfig) -> Option<Result<Box<dyn ScoreModel>, ModelError>> {
    let path = config.dir.join(config.onnx_scorer.as_ref()?);
    Some(super::OnnxScorer::load(&path).map(|model| {
        log_loaded(SCORER_NAME, &path);
        Box::new(model) as Box<dyn ScoreModel>
    }))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx_scorer(config: &ModelsConfig) -> Option<Result<Box<dyn ScoreModel>, ModelError>> {
    if config.onnx_scorer.is_some() {
        warn!("onnx_scorer configured but built without the onnx feature; using JSON scorer");
    }
    None
}

impl ModelSet {
    pub fn new(scorer: Box<dyn ScoreModel>, classifier: Box<dyn PassClassifier>) -> Self {
        Self {
            scorer: Some(scorer),
            classifier: Some(classifier),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn heuristic() -> Self {
        Self::new(Box::new(HeuristicModel), Box::new(HeuristicModel))
    }

    /// Names of required models that are absent.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.scorer.is_none() {
            out.push(SCORER_NAME);
        }
        if self.classifier.is_none() {
            out.push(CLASSIFIER_NAME);
        }
        out
    }

    pub fn is_complete(&self) -> bool {
        self.scorer.is_some() && self.classifier.is_some()
    }

    /// Load both artifacts. A missing or invalid artifact leaves its slot empty,
    /// or substitutes the heuristic model when `heuristic_fallback` is set.
    pub fn load(config: &ModelsConfig) -> Self {
        let scorer = match Self::load_scorer(config) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(model = SCORER_NAME, error = %e, "scorer unavailable");
                config
                    .heuristic_fallback
                    .then(|| Box::new(HeuristicModel) as Box<dyn ScoreModel>)
            }
        };
        let classifier = match Self::load_classifier(config) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(model = CLASSIFIER_NAME, error = %e, "classifier unavailable");
                config
                    .heuristic_fallback
                    .then(|| Box::new(HeuristicModel) as Box<dyn PassClassifier>)
            }
        };
        let set = Self { scorer, classifier };
        info!(models = ?set, "model set ready");
        set
    }

    fn load_scorer(config: &ModelsConfig) -> Result<Box<dyn ScoreModel>, ModelError> {
        if let Some(result) = load_onnx_scorer(config) {
            return result;
        }
        let path = config.scorer_path();
        let model = LinearScorer::load(&path)?;
        log_loaded(SCORER_NAME, &path);
        Ok(Box::new(model))
    }

    fn load_classifier(config: &ModelsConfig) -> Result<Box<dyn PassClassifier>, ModelError> {
        let path = config.classifier_path();
        let model = LogisticClassifier::load(&path)?;
        log_loaded(CLASSIFIER_NAME, &path);
        Ok(Box::new(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path, fallback: bool) -> ModelsConfig {
        ModelsConfig {
            dir: dir.to_path_buf(),
            heuristic_fallback: fallback,
            ..ModelsConfig::default()
        }
    }

    #[test]
    fn missing_artifacts_leave_slots_empty() {
        let dir = tempfile::tempdir().unwrap();
        let set = ModelSet::load(&config_in(dir.path(), false));
        assert!(!set.is_complete());
        assert_eq!(set.missing(), vec![SCORER_NAME, CLASSIFIER_NAME]);
    }

    #[test]
    fn missing_artifacts_use_heuristic_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let set = ModelSet::load(&config_in(dir.path(), true));
        assert!(set.is_complete());
        assert_eq!(set.scorer.as_ref().map(|m| m.name()), Some("heuristic"));
    }

    #[test]
    fn loads_json_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("jamb_xgb_regressor.json"),
            r#"{"intercept":150.0,"terms":["Engagement_Level"],"coefficients":[10.0]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("jamb_pass_classifier.json"),
            r#"{"intercept":-4.0,"terms":["Engagement_Level"],"coefficients":[1.0]}"#,
        )
        .unwrap();
        let set = ModelSet::load(&config_in(dir.path(), false));
        assert!(set.is_complete());
        assert!(set.missing().is_empty());
    }

    #[test]
    fn fingerprint_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        std::fs::write(&path, "abc").unwrap();
        assert_eq!(
            fingerprint(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
