//! Risk banding of predicted scores and advisory recommendations.

mod engine;
mod recommend;

pub use engine::{RiskEngine, RiskLevel};
pub use recommend::{recommendations, Recommendation};
