//! Integration tests for the career matcher

use career_matcher::config::ScoringConfig;
use career_matcher::input::manager::InputManager;
use career_matcher::matching::engine::MatchingEngine;
use career_matcher::matching::scoring::SimilarityMethod;
use career_matcher::output::formatter::{save_report_to_file, OutputFormatter};
use career_matcher::output::report::MatchReport;
use career_matcher::{compute_matches, CareerMatcherError, QuestionnaireSubmission};
use std::path::Path;

const ANSWERS: &str = "tests/fixtures/sample_answers.json";
const CATALOG: &str = "tests/fixtures/sample_catalog.json";

#[tokio::test]
async fn test_load_submission_fixture() {
    let mut manager = InputManager::new();
    let submission = manager.load_submission(Path::new(ANSWERS)).await.unwrap();

    assert_eq!(submission.answers.len(), 8);
    assert_eq!(
        submission.general_requirements,
        vec!["Team Work", "Problem Solving", "Creativity"]
    );
}

#[tokio::test]
async fn test_load_catalog_fixture() {
    let mut manager = InputManager::new();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog[0].job_name, "Software Developer");
    assert_eq!(catalog[0].job_field, "High Tech");
    assert!(catalog[0].prerequisites.is_some());
    // Descriptive fields ride along untouched
    assert!(catalog[1].education.contains("Chemistry"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();

    let first = manager.load_catalog(Path::new(CATALOG)).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_catalog(Path::new(CATALOG)).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager
        .load_catalog(Path::new("tests/fixtures/unsupported.xyz"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .load_submission(Path::new("tests/fixtures/nonexistent.json"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_overlap_ranking() {
    let mut manager = InputManager::new();
    let submission = manager.load_submission(Path::new(ANSWERS)).await.unwrap();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    let mut engine = MatchingEngine::new(&ScoringConfig::default()).unwrap();
    let run = engine.evaluate(&submission, &catalog, None).unwrap();

    let pairs: Vec<(&str, u8)> = run
        .ranked
        .iter()
        .map(|r| (r.job.as_str(), r.percentage))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Software Developer", 85),
            ("Research Chemist", 60),
            ("Event Planner", 33),
            ("Accountant", 20),
            ("Park Ranger", 20),
        ]
    );

    // The record with no matchable data is dropped, not scored as zero
    assert_eq!(run.excluded.len(), 1);
    assert_eq!(run.excluded[0].job, "Mystery Consultant");
    assert_eq!(run.catalog_size, 6);
}

#[tokio::test]
async fn test_end_to_end_cosine_ranking() {
    let mut manager = InputManager::new();
    let submission = manager.load_submission(Path::new(ANSWERS)).await.unwrap();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    let config = ScoringConfig {
        similarity: SimilarityMethod::Cosine,
        ..Default::default()
    };
    let mut engine = MatchingEngine::new(&config).unwrap();
    let run = engine.evaluate(&submission, &catalog, None).unwrap();

    let best = &run.ranked.results()[0];
    assert_eq!(best.job, "Software Developer");
    assert_eq!(best.percentage, 95);
}

#[tokio::test]
async fn test_top_k_limits_results() {
    let mut manager = InputManager::new();
    let submission = manager.load_submission(Path::new(ANSWERS)).await.unwrap();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    let ranked = compute_matches(&submission, &catalog, Some(2)).unwrap();
    let jobs: Vec<&str> = ranked.iter().map(|r| r.job.as_str()).collect();
    assert_eq!(jobs, vec!["Software Developer", "Research Chemist"]);

    let zero = compute_matches(&submission, &catalog, Some(0));
    assert!(matches!(zero, Err(CareerMatcherError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_ranked_list_serializes_job_percentage_pairs() {
    let mut manager = InputManager::new();
    let submission = manager.load_submission(Path::new(ANSWERS)).await.unwrap();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    let ranked = compute_matches(&submission, &catalog, Some(1)).unwrap();
    let json = serde_json::to_value(&ranked).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    let entry = entries[0].as_object().unwrap();
    assert_eq!(entry.len(), 2);
    assert_eq!(entry["job"], "Software Developer");
    assert_eq!(entry["percentage"], 85);
}

#[tokio::test]
async fn test_all_zero_submission_is_rejected() {
    let mut manager = InputManager::new();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    let submission: QuestionnaireSubmission = serde_json::from_str(
        r#"{"answers": [
            {"category": "Business", "rawScore": 0},
            {"category": "Science", "rawScore": 0}
        ]}"#,
    )
    .unwrap();

    let result = compute_matches(&submission, &catalog, None);
    assert!(matches!(result, Err(CareerMatcherError::EmptyInput)));
}

#[tokio::test]
async fn test_report_save_roundtrip() {
    let mut manager = InputManager::new();
    let submission = manager.load_submission(Path::new(ANSWERS)).await.unwrap();
    let catalog = manager.load_catalog(Path::new(CATALOG)).await.unwrap();

    let config = ScoringConfig::default();
    let mut engine = MatchingEngine::new(&config).unwrap();
    let run = engine.evaluate(&submission, &catalog, Some(3)).unwrap();
    let report = MatchReport::from_run(run, config.similarity);

    let rendered = career_matcher::output::formatter::JsonFormatter::new(true)
        .format_report(&report)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    save_report_to_file(&rendered, &path).unwrap();

    let reloaded: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded["results"][0]["job"], "Software Developer");
    assert_eq!(reloaded["metadata"]["scored"], 5);
}
