//! Student form inputs: raw string values as submitted and the typed record.

use crate::error::InputError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolType {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolLocation {
    Urban,
    Rural,
}

/// Ordinal used for parental involvement and IT knowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl SchoolType {
    pub fn as_str(self) -> &'static str {
        match self {
            SchoolType::Public => "Public",
            SchoolType::Private => "Private",
        }
    }
}

impl SchoolLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            SchoolLocation::Urban => "Urban",
            SchoolLocation::Rural => "Rural",
        }
    }
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Form values exactly as submitted. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStudentInput {
    pub study_hours: String,
    pub teacher_quality: String,
    pub attendance: String,
    pub distance: String,
    pub school_type: String,
    pub location: String,
    pub tutorials: String,
    pub materials: String,
    pub parent: String,
    pub it: String,
}

/// Typed student record used for feature engineering and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    /// Hours per week, 0–40
    pub study_hours: f64,
    /// Ordinal 1–5
    pub teacher_quality: f64,
    /// Percent, 50–100
    pub attendance: f64,
    /// Kilometres, at least 0.1
    pub distance_km: f64,
    pub school_type: SchoolType,
    pub location: SchoolLocation,
    pub extra_tutorials: bool,
    pub learning_materials: bool,
    pub parent_involvement: Level,
    pub it_knowledge: Level,
}

impl Default for StudentInput {
    fn default() -> Self {
        Self {
            study_hours: 20.0,
            teacher_quality: 3.0,
            attendance: 80.0,
            distance_km: 5.0,
            school_type: SchoolType::Public,
            location: SchoolLocation::Urban,
            extra_tutorials: false,
            learning_materials: true,
            parent_involvement: Level::Medium,
            it_knowledge: Level::Medium,
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::ValueConversion {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_choice<T: Copy>(
    field: &'static str,
    value: &str,
    choices: &[(&str, T)],
) -> Result<T, InputError> {
    let v = value.trim();
    choices
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(v))
        .map(|(_, t)| *t)
        .ok_or_else(|| InputError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

const YES_NO: [(&str, bool); 2] = [("Yes", true), ("No", false)];
const LEVELS: [(&str, Level); 3] = [
    ("Low", Level::Low),
    ("Medium", Level::Medium),
    ("High", Level::High),
];

impl RawStudentInput {
    pub fn parse(&self) -> Result<StudentInput, InputError> {
        Ok(StudentInput {
            study_hours: parse_number("study_hours", &self.study_hours)?,
            teacher_quality: parse_number("teacher_quality", &self.teacher_quality)?,
            attendance: parse_number("attendance", &self.attendance)?,
            distance_km: parse_number("distance", &self.distance)?,
            school_type: parse_choice(
                "school_type",
                &self.school_type,
                &[("Public", SchoolType::Public), ("Private", SchoolType::Private)],
            )?,
            location: parse_choice(
                "location",
                &self.location,
                &[("Urban", SchoolLocation::Urban), ("Rural", SchoolLocation::Rural)],
            )?,
            extra_tutorials: parse_choice("tutorials", &self.tutorials, &YES_NO)?,
            learning_materials: parse_choice("materials", &self.materials, &YES_NO)?,
            parent_involvement: parse_choice("parent", &self.parent, &LEVELS)?,
            it_knowledge: parse_choice("it", &self.it, &LEVELS)?,
        })
    }
}

impl From<&StudentInput> for RawStudentInput {
    fn from(s: &StudentInput) -> Self {
        Self {
            study_hours: s.study_hours.to_string(),
            teacher_quality: s.teacher_quality.to_string(),
            attendance: s.attendance.to_string(),
            distance: s.distance_km.to_string(),
            school_type: s.school_type.as_str().to_string(),
            location: s.location.as_str().to_string(),
            tutorials: yes_no(s.extra_tutorials).to_string(),
            materials: yes_no(s.learning_materials).to_string(),
            parent: s.parent_involvement.as_str().to_string(),
            it: s.it_knowledge.as_str().to_string(),
        }
    }
}

impl StudentInput {
    /// Names of numeric fields outside the form's accepted ranges. Such values
    /// are still used as-is.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !(0.0..=40.0).contains(&self.study_hours) {
            out.push("study_hours");
        }
        if !(1.0..=5.0).contains(&self.teacher_quality) {
            out.push("teacher_quality");
        }
        if !(50.0..=100.0).contains(&self.attendance) {
            out.push("attendance");
        }
        if self.distance_km < 0.1 {
            out.push("distance");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawStudentInput {
        RawStudentInput::from(&StudentInput::default())
    }

    #[test]
    fn parses_form_defaults() {
        let parsed = raw().parse().unwrap();
        assert_eq!(parsed, StudentInput::default());
    }

    #[test]
    fn option_labels_are_case_insensitive() {
        let mut r = raw();
        r.parent = " high ".into();
        r.tutorials = "YES".into();
        let parsed = r.parse().unwrap();
        assert_eq!(parsed.parent_involvement, Level::High);
        assert!(parsed.extra_tutorials);
    }

    #[test]
    fn malformed_number_is_value_conversion() {
        let mut r = raw();
        r.attendance = "eighty".into();
        assert_eq!(
            r.parse().unwrap_err(),
            InputError::ValueConversion {
                field: "attendance",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn non_finite_number_rejected() {
        let mut r = raw();
        r.distance = "NaN".into();
        assert!(matches!(
            r.parse(),
            Err(InputError::ValueConversion { field: "distance", .. })
        ));
    }

    #[test]
    fn unknown_option_rejected() {
        let mut r = raw();
        r.school_type = "Boarding".into();
        assert!(matches!(
            r.parse(),
            Err(InputError::UnknownOption { field: "school_type", .. })
        ));
    }

    #[test]
    fn out_of_range_reports_fields() {
        let mut s = StudentInput::default();
        assert!(s.out_of_range().is_empty());
        s.study_hours = 55.0;
        s.distance_km = 0.0;
        assert_eq!(s.out_of_range(), vec!["study_hours", "distance"]);
    }
}
