//! Heuristic advice evaluated on raw inputs, independent of the model.

use crate::features::StudentInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    StudyMore,
    AttendMore,
    ExtraTutorials,
    LearningMaterials,
    LiveCloser,
}

impl Recommendation {
    pub fn text(self) -> &'static str {
        match self {
            Recommendation::StudyMore => "Increase study time to at least 20 hours per week",
            Recommendation::AttendMore => "Improve class attendance to at least 85%",
            Recommendation::ExtraTutorials => "Consider enrolling in extra tutorial classes",
            Recommendation::LearningMaterials => "Ensure access to required learning materials",
            Recommendation::LiveCloser => "Consider finding accommodation closer to school",
        }
    }

    fn applies(self, input: &StudentInput) -> bool {
        match self {
            Recommendation::StudyMore => input.study_hours < 20.0,
            Recommendation::AttendMore => input.attendance < 85.0,
            Recommendation::ExtraTutorials => !input.extra_tutorials,
            Recommendation::LearningMaterials => !input.learning_materials,
            Recommendation::LiveCloser => input.distance_km > 10.0,
        }
    }
}

/// Rule order is fixed.
const RULES: [Recommendation; 5] = [
    Recommendation::StudyMore,
    Recommendation::AttendMore,
    Recommendation::ExtraTutorials,
    Recommendation::LearningMaterials,
    Recommendation::LiveCloser,
];

pub fn recommendations(input: &StudentInput) -> Vec<Recommendation> {
    RULES.into_iter().filter(|r| r.applies(input)).collect()
}
