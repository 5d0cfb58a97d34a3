//! Feature engineering: raw form inputs → model-compatible feature record.

mod engineered;
mod input;

pub use engineered::{defaults, EngineeredFeatures};
pub use input::{Level, RawStudentInput, SchoolLocation, SchoolType, StudentInput};

use crate::error::InputError;
use serde::Serialize;

/// Model column names, matching the training table.
pub mod columns {
    pub const STUDY_HOURS: &str = "Study_Hours_Per_Week";
    pub const TEACHER_QUALITY: &str = "Teacher_Quality";
    pub const ATTENDANCE_RATE: &str = "Attendance_Rate";
    pub const DISTANCE_TO_SCHOOL: &str = "Distance_To_School";
    pub const SCHOOL_TYPE: &str = "School_Type";
    pub const SCHOOL_LOCATION: &str = "School_Location";
    pub const EXTRA_TUTORIALS: &str = "Extra_Tutorials";
    pub const LEARNING_MATERIALS: &str = "Access_To_Learning_Materials";
    pub const PARENT_INVOLVEMENT: &str = "Parent_Involvement";
    pub const IT_KNOWLEDGE: &str = "IT_Knowledge";
    pub const PARENT_EDUCATION_LEVEL: &str = "Parent_Education_Level";
    pub const GENDER: &str = "Gender";
    pub const STUDENT_ID: &str = "Student_ID";
    pub const ASSIGNMENTS_COMPLETED: &str = "Assignments_Completed";
    pub const SOCIOECONOMIC_STATUS: &str = "Socioeconomic_Status";
    pub const AGE: &str = "Age";
    pub const STUDY_EFFICIENCY: &str = "Study_Efficiency";
    pub const SCHOOL_QUALITY_INDEX: &str = "School_Quality_Index";
    pub const ENGAGEMENT_LEVEL: &str = "Engagement_Level";
    pub const DISTANCE_BARRIER: &str = "Distance_Barrier";

    pub const ALL: [&str; 20] = [
        STUDY_HOURS,
        TEACHER_QUALITY,
        ATTENDANCE_RATE,
        DISTANCE_TO_SCHOOL,
        SCHOOL_TYPE,
        SCHOOL_LOCATION,
        EXTRA_TUTORIALS,
        LEARNING_MATERIALS,
        PARENT_INVOLVEMENT,
        IT_KNOWLEDGE,
        PARENT_EDUCATION_LEVEL,
        GENDER,
        STUDENT_ID,
        ASSIGNMENTS_COMPLETED,
        SOCIOECONOMIC_STATUS,
        AGE,
        STUDY_EFFICIENCY,
        SCHOOL_QUALITY_INDEX,
        ENGAGEMENT_LEVEL,
        DISTANCE_BARRIER,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(&'static str),
}

/// One tabular row of named columns, the shape pre-trained models consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    columns: Vec<(&'static str, FeatureValue)>,
}

impl FeatureRow {
    pub fn new(columns: Vec<(&'static str, FeatureValue)>) -> Self {
        Self { columns }
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.columns
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn numeric(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            FeatureValue::Numeric(v) => Some(v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn categorical(&self, name: &str) -> Option<&'static str> {
        match self.get(name)? {
            FeatureValue::Categorical(v) => Some(v),
            FeatureValue::Numeric(_) => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(n, _)| *n)
    }

    /// Numeric columns only, in row order (e.g. for tensor input).
    pub fn numeric_values(&self) -> Vec<f64> {
        self.columns
            .iter()
            .filter_map(|(_, v)| match v {
                FeatureValue::Numeric(x) => Some(*x),
                FeatureValue::Categorical(_) => None,
            })
            .collect()
    }
}

/// Pure derivation from a typed record.
pub fn derive(input: &StudentInput) -> EngineeredFeatures {
    EngineeredFeatures::from_input(input)
}

/// Parse raw form values, then derive. Malformed numerics fail with
/// [`InputError::ValueConversion`].
pub fn derive_raw(raw: &RawStudentInput) -> Result<EngineeredFeatures, InputError> {
    Ok(derive(&raw.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let raw = RawStudentInput::from(&StudentInput::default());
        let a = derive_raw(&raw).unwrap();
        let b = derive_raw(&raw).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.row(), b.row());
    }

    #[test]
    fn numeric_values_skip_categoricals() {
        let row = derive(&StudentInput::default()).row();
        assert_eq!(row.numeric_values().len(), 11);
        assert_eq!(row.numeric_values()[0], 20.0);
    }
}
