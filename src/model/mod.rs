//! Pre-trained model interfaces and implementations.
//!
//! Models are opaque: a scorer maps one feature row to a scalar score, a pass
//! classifier maps it to class probabilities `[fail, pass]`.

mod heuristic;
mod linear;
#[cfg(feature = "onnx")]
mod onnx;
mod set;

pub use heuristic::{heuristic_pass_percent, HeuristicModel};
pub use linear::{LinearArtifact, LinearScorer, LogisticClassifier};
#[cfg(feature = "onnx")]
pub use onnx::OnnxScorer;
pub use set::{ModelSet, CLASSIFIER_NAME, SCORER_NAME};

use crate::error::ModelError;
use crate::features::FeatureRow;

/// Score regressor.
pub trait ScoreModel: Send + Sync {
    fn name(&self) -> &str;
    fn score(&self, row: &FeatureRow) -> Result<f64, ModelError>;
}

/// Binary pass/fail classifier.
pub trait PassClassifier: Send + Sync {
    fn name(&self) -> &str;

    /// Class probabilities, index 1 is "pass". Classifiers without a
    /// probability output keep the default.
    fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::NoProbabilities)
    }

    /// Pass probability as a fraction in [0, 1].
    fn pass_probability(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let proba = self.predict_proba(row)?;
        match proba.get(1) {
            Some(&p) if p.is_finite() && (0.0..=1.0).contains(&p) => Ok(p),
            _ => Err(ModelError::MalformedProbabilities(proba)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{derive, StudentInput};

    struct Fixed(Vec<f64>);

    impl PassClassifier for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }
        fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
            Ok(self.0.clone())
        }
    }

    struct LabelsOnly;

    impl PassClassifier for LabelsOnly {
        fn name(&self) -> &str {
            "labels-only"
        }
    }

    #[test]
    fn pass_probability_reads_index_one() {
        let row = derive(&StudentInput::default()).row();
        assert_eq!(Fixed(vec![0.25, 0.75]).pass_probability(&row).unwrap(), 0.75);
    }

    #[test]
    fn malformed_and_missing_probabilities_are_flagged() {
        let row = derive(&StudentInput::default()).row();
        for bad in [vec![1.0], vec![0.5, f64::NAN], vec![-0.2, 1.2]] {
            let err = Fixed(bad).pass_probability(&row).unwrap_err();
            assert!(matches!(err, ModelError::MalformedProbabilities(_)));
            assert!(err.is_probability_fault());
        }
        let err = LabelsOnly.pass_probability(&row).unwrap_err();
        assert!(matches!(err, ModelError::NoProbabilities));
    }
}
