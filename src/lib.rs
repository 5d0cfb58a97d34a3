//! JAMB analytics core: prediction and resource-library logic behind the
//! student-performance dashboard.
//!
//! Modular structure:
//! - [`features`]: Raw form inputs → engineered feature record
//! - [`model`]: Score regressor / pass classifier interfaces and artifacts
//! - [`risk`]: Risk bands and advisory recommendations
//! - [`predict`]: Prediction requests end to end
//! - [`resources`]: Study-resource catalog with a file-backed cache
//! - [`dataset`]: Upstream exam table and overview statistics
//! - [`logging`]: Structured logging

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod predict;
pub mod resources;
pub mod risk;

pub use config::AppConfig;
pub use dataset::Dataset;
pub use error::{CacheError, DataError, InputError, ModelError, PredictionError};
pub use features::{EngineeredFeatures, FeatureRow, RawStudentInput, StudentInput};
pub use logging::StructuredLogger;
pub use model::{ModelSet, PassClassifier, ScoreModel};
pub use predict::{predict, PredictionResult, PredictionService};
pub use resources::{ResourceCache, ResourceEntry, ResourceLibrary};
pub use risk::{RiskEngine, RiskLevel};
