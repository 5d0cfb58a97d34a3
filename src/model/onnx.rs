//! ONNX Runtime scorer. Input: [1, n] f32 of the row's numeric columns, Output: score.
//! Uses `ort`; the regressor must be exported with numeric inputs only.

use super::ScoreModel;
use crate::error::ModelError;
use crate::features::FeatureRow;
use ndarray::Array2;
use ort::session::Session;
use std::path::Path;

pub struct OnnxScorer {
    session: Session,
    input_name: String,
    output_name: String,
}

fn inference(e: impl std::fmt::Display) -> ModelError {
    ModelError::Inference(e.to_string())
}

impl OnnxScorer {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }
        let session = Session::builder()
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| ModelError::Artifact {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "variable".to_string());

        Ok(Self {
            session,
            input_name,
            output_name,
        })
    }
}

impl ScoreModel for OnnxScorer {
    fn name(&self) -> &str {
        "onnx_regressor"
    }

    fn score(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let values: Vec<f32> = row.numeric_values().into_iter().map(|v| v as f32).collect();
        let arr = Array2::from_shape_vec((1, values.len()), values).map_err(inference)?;

        let inputs = ort::inputs![self.input_name.as_str() => arr.view()].map_err(inference)?;
        let outputs = self.session.run(inputs).map_err(inference)?;

        let view = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(inference)?;
        view.iter()
            .next()
            .map(|v| f64::from(*v))
            .ok_or_else(|| ModelError::Inference("empty output tensor".to_string()))
    }
}
