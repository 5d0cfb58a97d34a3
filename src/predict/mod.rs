//! Prediction requests: raw form inputs → features → models → risk and advice.

use crate::error::{ModelError, PredictionError};
use crate::features::{self, RawStudentInput, StudentInput};
use crate::model::{heuristic_pass_percent, ModelSet};
use crate::risk::{recommendations, RiskEngine, RiskLevel};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

/// Where the pass probability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilitySource {
    Model,
    /// Classifier had no usable probability output; 70/30 rule applied.
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_score: f64,
    /// Percent, 0–100
    pub pass_probability: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub probability_source: ProbabilitySource,
}

/// Predict with the default risk bands.
pub fn predict(
    input: &RawStudentInput,
    models: &ModelSet,
) -> Result<PredictionResult, PredictionError> {
    PredictionService::new(RiskEngine::default()).predict(input, models)
}

pub struct PredictionService {
    risk: RiskEngine,
}

impl PredictionService {
    pub fn new(risk: RiskEngine) -> Self {
        Self { risk }
    }

    /// Model availability is checked before the inputs are parsed.
    pub fn predict(
        &self,
        input: &RawStudentInput,
        models: &ModelSet,
    ) -> Result<PredictionResult, PredictionError> {
        let missing = models.missing();
        if !missing.is_empty() {
            warn!(?missing, "prediction requested without models");
            return Err(PredictionError::ModelUnavailable { missing });
        }
        let parsed = input.parse().map_err(|e| {
            error!(error = %e, "prediction input rejected");
            PredictionError::from(e)
        })?;
        self.predict_parsed(&parsed, models)
    }

    pub fn predict_parsed(
        &self,
        input: &StudentInput,
        models: &ModelSet,
    ) -> Result<PredictionResult, PredictionError> {
        let scorer = models.scorer.as_deref();
        let classifier = models.classifier.as_deref();
        let (Some(scorer), Some(classifier)) = (scorer, classifier) else {
            return Err(PredictionError::ModelUnavailable {
                missing: models.missing(),
            });
        };

        let out_of_range = input.out_of_range();
        if !out_of_range.is_empty() {
            warn!(fields = ?out_of_range, "input outside form ranges; predicting anyway");
        }

        let engineered = features::derive(input);
        if let Some(column) = engineered.non_finite_column() {
            error!(column, "engineered feature is not finite");
            return Err(PredictionError::Inference(ModelError::Inference(format!(
                "{column} is not finite"
            ))));
        }
        let row = engineered.row();

        let predicted_score = scorer.score(&row).map_err(|e| {
            error!(model = scorer.name(), error = %e, "scorer failed");
            PredictionError::Inference(e)
        })?;
        if !predicted_score.is_finite() {
            error!(model = scorer.name(), predicted_score, "scorer returned non-finite score");
            return Err(PredictionError::Inference(ModelError::Inference(
                "non-finite score".to_string(),
            )));
        }

        let (pass_probability, probability_source) = match classifier.pass_probability(&row) {
            Ok(p) => (p * 100.0, ProbabilitySource::Model),
            Err(e) if e.is_probability_fault() => {
                warn!(model = classifier.name(), error = %e, "using heuristic pass probability");
                (heuristic_pass_percent(predicted_score), ProbabilitySource::Heuristic)
            }
            Err(e) => {
                error!(model = classifier.name(), error = %e, "classifier failed");
                return Err(PredictionError::Inference(e));
            }
        };

        let risk_level = self.risk.classify(predicted_score);
        let recommendations = recommendations(input)
            .into_iter()
            .map(|r| r.text().to_string())
            .collect();

        debug!(predicted_score, pass_probability, risk = %risk_level, "prediction complete");
        Ok(PredictionResult {
            predicted_score,
            pass_probability,
            risk_level,
            recommendations,
            probability_source,
        })
    }

    /// Run a prediction, turning any failure into the single message shown to the user.
    pub fn predict_message(
        &self,
        input: &RawStudentInput,
        models: &ModelSet,
    ) -> Result<PredictionResult, String> {
        self.predict(input, models).map_err(|e| user_message(&e))
    }
}

pub fn user_message(err: &PredictionError) -> String {
    match err {
        PredictionError::ModelUnavailable { .. } => "Prediction model not available".to_string(),
        other => format!("Error making prediction: {other}"),
    }
}
