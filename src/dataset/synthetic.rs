//! Deterministic stand-in table used when the real dataset cannot be read.
//! Score effects follow the published factor insights (private +32,
//! materials +45, high parental involvement +38).

use super::ExamRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

pub fn synthetic_records(rows: usize, seed: u64) -> Vec<ExamRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            let study_hours: f64 = rng.gen_range(0.0..40.0);
            let attendance_rate: f64 = rng.gen_range(50.0..100.0);
            let teacher_quality = f64::from(rng.gen_range(1u8..=5));
            let distance_to_school: f64 = rng.gen_range(0.1..20.0);
            let school_type = pick(&mut rng, &["Public", "Private"]);
            let school_location = pick(&mut rng, &["Urban", "Rural"]);
            let extra_tutorials = pick(&mut rng, &["Yes", "No"]);
            let learning_materials = pick(&mut rng, &["Yes", "No"]);
            let parent_involvement = pick(&mut rng, &["Low", "Medium", "High"]);
            let it_knowledge = pick(&mut rng, &["Low", "Medium", "High"]);

            let mut score = 60.0
                + 2.5 * study_hours
                + 0.6 * attendance_rate
                + 11.0 * teacher_quality
                - 1.25 * distance_to_school;
            if school_type == "Private" {
                score += 32.0;
            }
            if learning_materials == "Yes" {
                score += 45.0;
            }
            if parent_involvement == "High" {
                score += 38.0;
            }
            if extra_tutorials == "Yes" {
                score += 15.0;
            }
            score += rng.gen_range(-20.0..20.0);

            ExamRecord {
                jamb_score: score.clamp(0.0, 400.0).round(),
                study_hours: study_hours.round(),
                attendance_rate: attendance_rate.round(),
                teacher_quality,
                distance_to_school: (distance_to_school * 10.0).round() / 10.0,
                school_type: school_type.to_string(),
                school_location: school_location.to_string(),
                extra_tutorials: extra_tutorials.to_string(),
                learning_materials: learning_materials.to_string(),
                parent_involvement: parent_involvement.to_string(),
                it_knowledge: it_knowledge.to_string(),
            }
        })
        .collect()
}
