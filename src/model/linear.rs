//! Linear and logistic models exported as JSON artifacts.
//!
//! Artifact shape:
//! `{"name": "...", "intercept": 100.0, "terms": ["Study_Hours_Per_Week", "School_Type=Private"], "coefficients": [2.5, 12.0]}`
//!
//! A plain term reads a numeric column; `column=Level` is a one-hot indicator
//! on a categorical column.

use super::{PassClassifier, ScoreModel};
use crate::error::ModelError;
use crate::features::{FeatureRow, FeatureValue};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    #[serde(default)]
    pub name: Option<String>,
    pub intercept: f64,
    pub terms: Vec<String>,
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
enum Term {
    Numeric(String),
    Indicator { column: String, level: String },
}

impl Term {
    fn parse(raw: &str) -> Self {
        match raw.split_once('=') {
            Some((column, level)) => Term::Indicator {
                column: column.trim().to_string(),
                level: level.trim().to_string(),
            },
            None => Term::Numeric(raw.trim().to_string()),
        }
    }

    fn value(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        match self {
            Term::Numeric(column) => match row.get(column) {
                Some(FeatureValue::Numeric(v)) => Ok(v),
                Some(FeatureValue::Categorical(_)) => Err(ModelError::Inference(format!(
                    "column {column} is categorical; use {column}=<level>"
                ))),
                None => Err(ModelError::MissingColumn(column.clone())),
            },
            Term::Indicator { column, level } => match row.get(column) {
                Some(FeatureValue::Categorical(v)) => {
                    Ok(if v == level.as_str() { 1.0 } else { 0.0 })
                }
                Some(FeatureValue::Numeric(_)) => Err(ModelError::Inference(format!(
                    "column {column} is numeric; indicator term not applicable"
                ))),
                None => Err(ModelError::MissingColumn(column.clone())),
            },
        }
    }
}

#[derive(Debug, Clone)]
struct LinearModel {
    name: String,
    intercept: f64,
    terms: Vec<Term>,
    coefficients: Vec<f64>,
}

impl LinearModel {
    fn from_artifact(artifact: LinearArtifact, default_name: &str) -> Result<Self, String> {
        if artifact.terms.len() != artifact.coefficients.len() {
            return Err(format!(
                "{} terms but {} coefficients",
                artifact.terms.len(),
                artifact.coefficients.len()
            ));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("non-finite parameter".to_string());
        }
        Ok(Self {
            name: artifact.name.unwrap_or_else(|| default_name.to_string()),
            intercept: artifact.intercept,
            terms: artifact.terms.iter().map(|t| Term::parse(t)).collect(),
            coefficients: artifact.coefficients,
        })
    }

    fn read(path: &Path, default_name: &str) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let artifact_err = |reason: String| ModelError::Artifact {
            path: path.to_path_buf(),
            reason,
        };
        let data = std::fs::read_to_string(path).map_err(|e| artifact_err(e.to_string()))?;
        let artifact: LinearArtifact =
            serde_json::from_str(&data).map_err(|e| artifact_err(e.to_string()))?;
        Self::from_artifact(artifact, default_name).map_err(artifact_err)
    }

    fn decision(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let mut z = self.intercept;
        for (term, coef) in self.terms.iter().zip(&self.coefficients) {
            z += coef * term.value(row)?;
        }
        Ok(z)
    }
}

/// Linear regressor: `intercept + Σ coef·term`.
#[derive(Debug, Clone)]
pub struct LinearScorer {
    inner: LinearModel,
}

impl LinearScorer {
    pub fn new(intercept: f64, terms: &[&str], coefficients: &[f64]) -> Result<Self, ModelError> {
        Self::from_artifact(LinearArtifact {
            name: None,
            intercept,
            terms: terms.iter().map(|t| t.to_string()).collect(),
            coefficients: coefficients.to_vec(),
        })
    }

    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, ModelError> {
        LinearModel::from_artifact(artifact, "linear_scorer")
            .map(|inner| Self { inner })
            .map_err(|reason| ModelError::Artifact {
                path: "<inline>".into(),
                reason,
            })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        LinearModel::read(path, "linear_scorer").map(|inner| Self { inner })
    }
}

impl ScoreModel for LinearScorer {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn score(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        self.inner.decision(row)
    }
}

/// Logistic pass classifier: `p_pass = σ(intercept + Σ coef·term)`.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    inner: LinearModel,
}

impl LogisticClassifier {
    pub fn new(intercept: f64, terms: &[&str], coefficients: &[f64]) -> Result<Self, ModelError> {
        Self::from_artifact(LinearArtifact {
            name: None,
            intercept,
            terms: terms.iter().map(|t| t.to_string()).collect(),
            coefficients: coefficients.to_vec(),
        })
    }

    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, ModelError> {
        LinearModel::from_artifact(artifact, "logistic_classifier")
            .map(|inner| Self { inner })
            .map_err(|reason| ModelError::Artifact {
                path: "<inline>".into(),
                reason,
            })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        LinearModel::read(path, "logistic_classifier").map(|inner| Self { inner })
    }
}

impl PassClassifier for LogisticClassifier {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
        let z = self.inner.decision(row)?;
        let p = 1.0 / (1.0 + (-z).exp());
        Ok(vec![1.0 - p, p])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{columns, derive, StudentInput};

    fn example_scorer() -> LinearScorer {
        LinearScorer::new(
            100.0,
            &[
                columns::STUDY_HOURS,
                columns::TEACHER_QUALITY,
                columns::ATTENDANCE_RATE,
                columns::DISTANCE_TO_SCHOOL,
            ],
            &[2.5, 10.0, 0.5, -2.0],
        )
        .unwrap()
    }

    #[test]
    fn linear_score_matches_hand_computation() {
        let row = derive(&StudentInput::default()).row();
        // 100 + 2.5*20 + 10*3 + 0.5*80 - 2*5
        assert!((example_scorer().score(&row).unwrap() - 210.0).abs() < 1e-9);
    }

    #[test]
    fn indicator_terms_one_hot() {
        let s = LinearScorer::new(0.0, &["School_Type=Public", "School_Type=Private"], &[5.0, 9.0])
            .unwrap();
        let row = derive(&StudentInput::default()).row();
        assert_eq!(s.score(&row).unwrap(), 5.0);
    }

    #[test]
    fn unknown_column_is_missing_column() {
        let s = LinearScorer::new(0.0, &["Shoe_Size"], &[1.0]).unwrap();
        let row = derive(&StudentInput::default()).row();
        assert!(matches!(s.score(&row), Err(ModelError::MissingColumn(c)) if c == "Shoe_Size"));
    }

    #[test]
    fn mismatched_artifact_rejected() {
        assert!(matches!(
            LinearScorer::new(0.0, &["Age"], &[1.0, 2.0]),
            Err(ModelError::Artifact { .. })
        ));
    }

    #[test]
    fn logistic_probabilities_sum_to_one() {
        let c = LogisticClassifier::new(-10.0, &[columns::SCHOOL_QUALITY_INDEX], &[5.0]).unwrap();
        let row = derive(&StudentInput::default()).row();
        let proba = c.predict_proba(&row).unwrap();
        assert_eq!(proba.len(), 2);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
        // z = -10 + 5*2.2 = 1.0
        assert!((proba[1] - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn load_reads_json_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scorer.json");
        std::fs::write(
            &path,
            r#"{"name":"jamb_xgb_regressor","intercept":100.0,"terms":["Age"],"coefficients":[1.0]}"#,
        )
        .unwrap();
        let s = LinearScorer::load(&path).unwrap();
        assert_eq!(s.name(), "jamb_xgb_regressor");
        let row = derive(&StudentInput::default()).row();
        assert_eq!(s.score(&row).unwrap(), 118.0);
        assert!(matches!(
            LinearScorer::load(&dir.path().join("missing.json")),
            Err(ModelError::NotFound(_))
        ));
    }
}
