//! Fallback model used when trained artifacts are unavailable.
//! Score: 100 + 2.5·hours + 10·teacher + 0.5·attendance − 2·distance.
//! Probabilities: [0.3, 0.7] above a score of 200, else [0.7, 0.3].

use super::{PassClassifier, ScoreModel};
use crate::error::ModelError;
use crate::features::{columns, FeatureRow};

pub const HEURISTIC_PASS_SCORE: f64 = 200.0;

const INTERCEPT: f64 = 100.0;
const WEIGHTS: [(&str, f64); 4] = [
    (columns::STUDY_HOURS, 2.5),
    (columns::TEACHER_QUALITY, 10.0),
    (columns::ATTENDANCE_RATE, 0.5),
    (columns::DISTANCE_TO_SCHOOL, -2.0),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicModel;

/// Pass probability (percent) used whenever a classifier cannot provide one.
pub fn heuristic_pass_percent(score: f64) -> f64 {
    if score > HEURISTIC_PASS_SCORE {
        70.0
    } else {
        30.0
    }
}

impl ScoreModel for HeuristicModel {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn score(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let mut score = INTERCEPT;
        for (column, weight) in WEIGHTS {
            let v = row
                .numeric(column)
                .ok_or_else(|| ModelError::MissingColumn(column.to_string()))?;
            score += weight * v;
        }
        Ok(score)
    }
}

impl PassClassifier for HeuristicModel {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
        let pass = heuristic_pass_percent(self.score(row)?) / 100.0;
        Ok(vec![1.0 - pass, pass])
    }
}
