//! Upstream exam-performance table (read-only) and the summary numbers the
//! dashboard shows over it.

mod stats;
mod synthetic;

pub use stats::{CorrelationMatrix, FactorLevel, Overview, CORRELATION_COLUMNS};
pub use synthetic::synthetic_records;

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Score at or above which a candidate passes.
pub const PASS_SCORE: f64 = 200.0;
/// Score at or above which a candidate is a top performer.
pub const TOP_SCORE: f64 = 250.0;

/// One row of `jamb_enhanced.csv`; other columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRecord {
    #[serde(rename = "JAMB_Score")]
    pub jamb_score: f64,
    #[serde(rename = "Study_Hours_Per_Week")]
    pub study_hours: f64,
    #[serde(rename = "Attendance_Rate")]
    pub attendance_rate: f64,
    #[serde(rename = "Teacher_Quality")]
    pub teacher_quality: f64,
    #[serde(rename = "Distance_To_School")]
    pub distance_to_school: f64,
    #[serde(rename = "School_Type")]
    pub school_type: String,
    #[serde(rename = "School_Location")]
    pub school_location: String,
    #[serde(rename = "Extra_Tutorials")]
    pub extra_tutorials: String,
    #[serde(rename = "Access_To_Learning_Materials")]
    pub learning_materials: String,
    #[serde(rename = "Parent_Involvement")]
    pub parent_involvement: String,
    #[serde(rename = "IT_Knowledge")]
    pub it_knowledge: String,
}

/// Categorical columns that can be broken down by level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    SchoolType,
    SchoolLocation,
    ExtraTutorials,
    LearningMaterials,
    ParentInvolvement,
    ItKnowledge,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::SchoolType,
        Factor::SchoolLocation,
        Factor::ExtraTutorials,
        Factor::LearningMaterials,
        Factor::ParentInvolvement,
        Factor::ItKnowledge,
    ];

    pub fn column(self) -> &'static str {
        match self {
            Factor::SchoolType => "School_Type",
            Factor::SchoolLocation => "School_Location",
            Factor::ExtraTutorials => "Extra_Tutorials",
            Factor::LearningMaterials => "Access_To_Learning_Materials",
            Factor::ParentInvolvement => "Parent_Involvement",
            Factor::ItKnowledge => "IT_Knowledge",
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.column().eq_ignore_ascii_case(name))
    }

    fn value(self, r: &ExamRecord) -> &str {
        match self {
            Factor::SchoolType => &r.school_type,
            Factor::SchoolLocation => &r.school_location,
            Factor::ExtraTutorials => &r.extra_tutorials,
            Factor::LearningMaterials => &r.learning_materials,
            Factor::ParentInvolvement => &r.parent_involvement,
            Factor::ItKnowledge => &r.it_knowledge,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ExamRecord>,
    synthetic: bool,
}

impl Dataset {
    pub fn from_records(records: Vec<ExamRecord>) -> Self {
        Self {
            records,
            synthetic: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let unavailable = |reason: String| DataError::Unavailable {
            path: path.to_path_buf(),
            reason,
        };
        let mut reader = csv::Reader::from_path(path).map_err(|e| unavailable(e.to_string()))?;
        let mut records = Vec::new();
        for (i, row) in reader.deserialize::<ExamRecord>().enumerate() {
            records.push(row.map_err(|source| DataError::Parse { row: i + 1, source })?);
        }
        info!(path = %path.display(), rows = records.len(), "dataset loaded");
        Ok(Self::from_records(records))
    }

    /// Load the table, substituting deterministic synthetic data if it is
    /// missing or unreadable.
    pub fn load_or_synthetic(path: &Path, rows: usize, seed: u64) -> Self {
        match Self::load(path) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, rows, seed, "dataset unavailable; using synthetic data");
                Self::synthetic(rows, seed)
            }
        }
    }

    pub fn synthetic(rows: usize, seed: u64) -> Self {
        Self {
            records: synthetic_records(rows, seed),
            synthetic: true,
        }
    }

    pub fn records(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn overview(&self) -> Option<Overview> {
        stats::overview(&self.records)
    }

    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        stats::correlation_matrix(&self.records)
    }

    pub fn factor_summary(&self, factor: Factor) -> Vec<FactorLevel> {
        stats::factor_summary(&self.records, |r| factor.value(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Student_ID,JAMB_Score,Study_Hours_Per_Week,Attendance_Rate,Teacher_Quality,Distance_To_School,School_Type,School_Location,Extra_Tutorials,Access_To_Learning_Materials,Parent_Involvement,IT_Knowledge,Gender
1,180,10,70,2,12.5,Public,Rural,No,No,Low,Low,Male
2,260,30,95,5,2.0,Private,Urban,Yes,Yes,High,High,Female
3,220,22,85,3,6.0,Public,Urban,Yes,Yes,Medium,Medium,Female
";

    #[test]
    fn loads_csv_ignoring_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jamb.csv");
        std::fs::write(&path, CSV).unwrap();
        let d = Dataset::load(&path).unwrap();
        assert_eq!(d.records().len(), 3);
        assert_eq!(d.records()[1].school_type, "Private");
        assert!(!d.is_synthetic());
    }

    #[test]
    fn bad_row_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jamb.csv");
        std::fs::write(&path, CSV.replace("260", "lots")).unwrap();
        assert!(matches!(Dataset::load(&path), Err(DataError::Parse { row: 2, .. })));
    }

    #[test]
    fn missing_file_falls_back_to_synthetic() {
        let d = Dataset::load_or_synthetic(Path::new("does/not/exist.csv"), 50, 7);
        assert!(d.is_synthetic());
        assert_eq!(d.records().len(), 50);
    }

    #[test]
    fn factor_lookup_by_column() {
        assert_eq!(Factor::from_column("parent_involvement"), Some(Factor::ParentInvolvement));
        assert_eq!(Factor::from_column("Gender"), None);
    }
}
