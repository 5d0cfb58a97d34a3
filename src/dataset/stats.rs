use super::{ExamRecord, PASS_SCORE, TOP_SCORE};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub students: usize,
    pub average_score: f64,
    /// Percent scoring at least 200
    pub pass_rate: f64,
    /// Percent scoring at least 250
    pub top_performers: f64,
}

pub const CORRELATION_COLUMNS: [&str; 5] = [
    "JAMB_Score",
    "Study_Hours_Per_Week",
    "Attendance_Rate",
    "Teacher_Quality",
    "Distance_To_School",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<&'static str>,
    /// Row-major Pearson coefficients; NaN where a column has zero variance
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == a)?;
        let j = self.columns.iter().position(|c| *c == b)?;
        Some(self.values[i][j])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorLevel {
    pub level: String,
    pub count: usize,
    pub mean_score: f64,
}

pub(super) fn overview(records: &[ExamRecord]) -> Option<Overview> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;
    let total: f64 = records.iter().map(|r| r.jamb_score).sum();
    let passed = records.iter().filter(|r| r.jamb_score >= PASS_SCORE).count() as f64;
    let top = records.iter().filter(|r| r.jamb_score >= TOP_SCORE).count() as f64;
    Some(Overview {
        students: records.len(),
        average_score: total / n,
        pass_rate: passed / n * 100.0,
        top_performers: top / n * 100.0,
    })
}

fn column(records: &[ExamRecord], idx: usize) -> Vec<f64> {
    records
        .iter()
        .map(|r| match idx {
            0 => r.jamb_score,
            1 => r.study_hours,
            2 => r.attendance_rate,
            3 => r.teacher_quality,
            _ => r.distance_to_school,
        })
        .collect()
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    if x.len() < 2 {
        return f64::NAN;
    }
    let mx = x.iter().sum::<f64>() / n;
    let my = y.iter().sum::<f64>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

pub(super) fn correlation_matrix(records: &[ExamRecord]) -> CorrelationMatrix {
    let cols: Vec<Vec<f64>> = (0..CORRELATION_COLUMNS.len())
        .map(|i| column(records, i))
        .collect();
    let values = cols
        .iter()
        .map(|a| cols.iter().map(|b| pearson(a, b)).collect())
        .collect();
    CorrelationMatrix {
        columns: CORRELATION_COLUMNS.to_vec(),
        values,
    }
}

/// Count and mean score per level, ordered by level name.
pub(super) fn factor_summary<'a>(
    records: &'a [ExamRecord],
    level_of: impl Fn(&'a ExamRecord) -> &'a str,
) -> Vec<FactorLevel> {
    let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for r in records {
        let e = groups.entry(level_of(r)).or_insert((0, 0.0));
        e.0 += 1;
        e.1 += r.jamb_score;
    }
    groups
        .into_iter()
        .map(|(level, (count, total))| FactorLevel {
            level: level.to_string(),
            count,
            mean_score: total / count as f64,
        })
        .collect()
}
