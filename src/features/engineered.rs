//! Engineered record: raw inputs → placeholder defaults → derived indices → row.

use super::input::{yes_no, StudentInput};
use super::{columns, FeatureRow, FeatureValue};
use serde::{Deserialize, Serialize};

/// Placeholder values for columns the form does not collect.
pub mod defaults {
    pub const PARENT_EDUCATION_LEVEL: &str = "Secondary";
    pub const GENDER: &str = "Male";
    pub const STUDENT_ID: f64 = 1000.0;
    pub const ASSIGNMENTS_COMPLETED: f64 = 80.0;
    pub const SOCIOECONOMIC_STATUS: &str = "Middle";
    pub const AGE: f64 = 18.0;
    pub const STUDY_EFFICIENCY: f64 = 0.7;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeredFeatures {
    pub input: StudentInput,
    pub school_quality_index: f64,
    pub engagement_level: f64,
    pub distance_barrier: f64,
}

pub(crate) fn school_quality_index(input: &StudentInput) -> f64 {
    let mut v = input.teacher_quality * 0.6;
    if input.learning_materials {
        v += 0.4;
    }
    v
}

pub(crate) fn engagement_level(input: &StudentInput) -> f64 {
    let mut v = input.attendance / 20.0;
    if input.extra_tutorials {
        v += 1.0;
    }
    if input.parent_involvement == super::Level::High {
        v += 1.0;
    }
    v
}

pub(crate) fn distance_barrier(input: &StudentInput) -> f64 {
    1.0 / (1.0 + input.distance_km)
}

impl EngineeredFeatures {
    pub fn from_input(input: &StudentInput) -> Self {
        Self {
            input: *input,
            school_quality_index: school_quality_index(input),
            engagement_level: engagement_level(input),
            distance_barrier: distance_barrier(input),
        }
    }

    /// First derived column whose value is not finite (e.g. distance of -1 km).
    pub fn non_finite_column(&self) -> Option<&'static str> {
        [
            (columns::SCHOOL_QUALITY_INDEX, self.school_quality_index),
            (columns::ENGAGEMENT_LEVEL, self.engagement_level),
            (columns::DISTANCE_BARRIER, self.distance_barrier),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite())
        .map(|(name, _)| name)
    }

    /// Single-row record in model column order.
    pub fn row(&self) -> FeatureRow {
        use FeatureValue::{Categorical as C, Numeric as N};
        let i = &self.input;
        FeatureRow::new(vec![
            (columns::STUDY_HOURS, N(i.study_hours)),
            (columns::TEACHER_QUALITY, N(i.teacher_quality)),
            (columns::ATTENDANCE_RATE, N(i.attendance)),
            (columns::DISTANCE_TO_SCHOOL, N(i.distance_km)),
            (columns::SCHOOL_TYPE, C(i.school_type.as_str())),
            (columns::SCHOOL_LOCATION, C(i.location.as_str())),
            (columns::EXTRA_TUTORIALS, C(yes_no(i.extra_tutorials))),
            (columns::LEARNING_MATERIALS, C(yes_no(i.learning_materials))),
            (columns::PARENT_INVOLVEMENT, C(i.parent_involvement.as_str())),
            (columns::IT_KNOWLEDGE, C(i.it_knowledge.as_str())),
            (columns::PARENT_EDUCATION_LEVEL, C(defaults::PARENT_EDUCATION_LEVEL)),
            (columns::GENDER, C(defaults::GENDER)),
            (columns::STUDENT_ID, N(defaults::STUDENT_ID)),
            (columns::ASSIGNMENTS_COMPLETED, N(defaults::ASSIGNMENTS_COMPLETED)),
            (columns::SOCIOECONOMIC_STATUS, C(defaults::SOCIOECONOMIC_STATUS)),
            (columns::AGE, N(defaults::AGE)),
            (columns::STUDY_EFFICIENCY, N(defaults::STUDY_EFFICIENCY)),
            (columns::SCHOOL_QUALITY_INDEX, N(self.school_quality_index)),
            (columns::ENGAGEMENT_LEVEL, N(self.engagement_level)),
            (columns::DISTANCE_BARRIER, N(self.distance_barrier)),
        ])
    }
}
