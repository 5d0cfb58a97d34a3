//! Integration test: config load, model artifacts, prediction, resource cache lifecycle.

use jamb_analytics::{
    config::{AppConfig, ModelsConfig},
    dataset::Dataset,
    features::{self, columns},
    model::{LinearScorer, LogisticClassifier, ModelSet},
    predict::{predict, PredictionService, ProbabilitySource},
    resources::{ResourceCache, ResourceLibrary},
    risk::{RiskEngine, RiskLevel},
    PredictionError, RawStudentInput, StudentInput,
};
use std::path::Path;
use std::time::Duration;

fn worked_example_input() -> RawStudentInput {
    RawStudentInput {
        study_hours: "20".into(),
        teacher_quality: "3".into(),
        attendance: "80".into(),
        distance: "5.0".into(),
        school_type: "Public".into(),
        location: "Urban".into(),
        tutorials: "No".into(),
        materials: "Yes".into(),
        parent: "Medium".into(),
        it: "Medium".into(),
    }
}

#[test]
fn config_load_default() {
    let c = AppConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.cache.ttl_secs, 86_400);
    assert_eq!(c.risk.low_threshold, 250.0);
    assert!(!c.models.heuristic_fallback);
}

#[test]
fn worked_example_end_to_end() {
    let f = features::derive_raw(&worked_example_input()).unwrap();
    assert!((f.school_quality_index - 2.2).abs() < 1e-9);
    assert!((f.engagement_level - 4.0).abs() < 1e-9);
    assert!((f.distance_barrier - 0.1667).abs() < 1e-4);

    let scorer = LinearScorer::new(
        100.0,
        &[
            columns::STUDY_HOURS,
            columns::TEACHER_QUALITY,
            columns::ATTENDANCE_RATE,
            columns::DISTANCE_TO_SCHOOL,
        ],
        &[2.5, 10.0, 0.5, -2.0],
    )
    .unwrap();
    let classifier = LogisticClassifier::new(0.0, &[columns::DISTANCE_BARRIER], &[0.0]).unwrap();
    let models = ModelSet::new(Box::new(scorer), Box::new(classifier));

    let a = predict(&worked_example_input(), &models).unwrap();
    let b = predict(&worked_example_input(), &models).unwrap();
    assert_eq!(a, b);
    assert!((a.predicted_score - 210.0).abs() < 1e-9);
    assert!((a.pass_probability - 50.0).abs() < 1e-9);
    assert_eq!(a.risk_level, RiskLevel::Medium);
    assert_eq!(a.probability_source, ProbabilitySource::Model);
}

#[test]
fn artifacts_on_disk_drive_predictions() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("jamb_xgb_regressor.json"),
        r#"{"name":"jamb_xgb_regressor","intercept":120.0,"terms":["School_Quality_Index","Engagement_Level","School_Type=Private"],"coefficients":[20.0,15.0,32.0]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("jamb_pass_classifier.json"),
        r#"{"name":"jamb_pass_classifier","intercept":-2.0,"terms":["Engagement_Level"],"coefficients":[0.5]}"#,
    )
    .unwrap();
    let config = ModelsConfig {
        dir: dir.path().to_path_buf(),
        ..ModelsConfig::default()
    };
    let models = ModelSet::load(&config);
    let service = PredictionService::new(RiskEngine::default());
    let result = service.predict(&worked_example_input(), &models).unwrap();
    // 120 + 20*2.2 + 15*4.0
    assert!((result.predicted_score - 224.0).abs() < 1e-9);
    assert!((result.pass_probability - 50.0).abs() < 1e-9);
}

#[test]
fn missing_models_reported_without_panic() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelsConfig {
        dir: dir.path().to_path_buf(),
        ..ModelsConfig::default()
    };
    let models = ModelSet::load(&config);
    let err = predict(&worked_example_input(), &models).unwrap_err();
    assert!(matches!(err, PredictionError::ModelUnavailable { .. }));

    let service = PredictionService::new(RiskEngine::default());
    assert_eq!(
        service.predict_message(&worked_example_input(), &models).unwrap_err(),
        "Prediction model not available"
    );
}

#[test]
fn heuristic_models_satisfy_the_same_interface() {
    let r = predict(&worked_example_input(), &ModelSet::heuristic()).unwrap();
    assert!((r.predicted_score - 210.0).abs() < 1e-9);
    assert!((r.pass_probability - 70.0).abs() < 1e-9);

    let weak = StudentInput {
        study_hours: 2.0,
        attendance: 55.0,
        teacher_quality: 1.0,
        distance_km: 18.0,
        ..StudentInput::default()
    };
    let r = predict(&RawStudentInput::from(&weak), &ModelSet::heuristic()).unwrap();
    assert_eq!(r.risk_level, RiskLevel::High);
    assert_eq!(r.recommendations.len(), 4);
}

#[test]
fn resource_cache_survives_restart_within_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        ..AppConfig::default()
    };

    let mut lib = ResourceLibrary::open(&config);
    assert!(lib.cache().is_empty());
    let first = lib.get_resources("Chemistry", Some("Electrolysis"));
    lib.get_resources("Chemistry", None);
    lib.persist();

    let mut reopened = ResourceLibrary::open(&config);
    assert_eq!(reopened.cache().len(), 2);
    assert_eq!(reopened.get_resources("Chemistry", Some("Electrolysis")), first);

    let stale = ResourceCache::load_at(
        &config.cache_path(),
        Duration::from_secs(config.cache.ttl_secs),
        chrono::Utc::now() + chrono::Duration::days(2),
    );
    assert!(stale.is_empty());
}

#[test]
fn dataset_falls_back_to_synthetic() {
    let d = Dataset::load_or_synthetic(Path::new("nonexistent.csv"), 200, 42);
    assert!(d.is_synthetic());
    let o = d.overview().unwrap();
    assert_eq!(o.students, 200);
    assert!(o.top_performers <= o.pass_rate);
}
