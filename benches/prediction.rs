//! Prediction benchmark: raw form inputs → features → models → result.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jamb_analytics::features::{self, columns};
use jamb_analytics::model::{LinearScorer, LogisticClassifier, ModelSet};
use jamb_analytics::{predict, RawStudentInput, StudentInput};

fn linear_models() -> ModelSet {
    let scorer = LinearScorer::new(
        100.0,
        &[
            columns::STUDY_HOURS,
            columns::TEACHER_QUALITY,
            columns::ATTENDANCE_RATE,
            columns::DISTANCE_TO_SCHOOL,
            "School_Type=Private",
        ],
        &[2.5, 10.0, 0.5, -2.0, 32.0],
    )
    .unwrap();
    let classifier =
        LogisticClassifier::new(-4.0, &[columns::ENGAGEMENT_LEVEL], &[1.0]).unwrap();
    ModelSet::new(Box::new(scorer), Box::new(classifier))
}

fn bench_derive(c: &mut Criterion) {
    let raw = RawStudentInput::from(&StudentInput::default());
    c.bench_function("derive_features_raw", |b| {
        b.iter(|| features::derive_raw(black_box(&raw)))
    });
}

fn bench_predict(c: &mut Criterion) {
    let raw = RawStudentInput::from(&StudentInput::default());
    let mut g = c.benchmark_group("predict");
    for (name, models) in [("linear", linear_models()), ("heuristic", ModelSet::heuristic())] {
        g.bench_function(name, |b| b.iter(|| predict(black_box(&raw), &models)));
    }
    g.finish();
}

criterion_group!(benches, bench_derive, bench_predict);
criterion_main!(benches);
