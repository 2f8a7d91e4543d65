use std::io::Write;
use std::sync::Arc;

use topicwise::defaults::portfolio_catalog;
use topicwise::{
    DetailFallback, ResolutionEngine, ResolverConfig, ResponseMode, TopicCatalog, ValidationError,
};

const CATALOG_JSON: &str = r#"{
    "topics": [
        {
            "id": "Pricing",
            "summary": "Plans start at $10 a month.",
            "detail": "Starter is $10, Team is $25 per seat, Enterprise is quoted.",
            "synonyms": ["Price", "cost", "how much"]
        },
        {
            "id": "support",
            "summary": "Email support@example.com.",
            "synonyms": ["help", "contact"]
        }
    ]
}"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_catalog_from_file_and_resolve() {
    let file = write_temp(CATALOG_JSON);
    let catalog = TopicCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);

    let engine = ResolutionEngine::new(Arc::new(catalog));

    let result = engine.resolve("How much does it COST?");
    assert_eq!(result.topic().map(|t| t.as_str()), Some("pricing"));
    assert_eq!(result.mode(), Some(ResponseMode::Summary));

    let detail = engine.respond("more details on pricing please").unwrap();
    assert_eq!(detail, "Starter is $10, Team is $25 per seat, Enterprise is quoted.");

    // support has no detail text: same-topic summary.
    let text = engine.respond("more details about support").unwrap();
    assert!(text.starts_with("Email support@example.com."));
}

#[test]
fn missing_catalog_file_is_invalid_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let err = TopicCatalog::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCatalog { .. }));
}

#[test]
fn duplicate_ids_in_file_are_rejected() {
    let file = write_temp(
        r#"{"topics": [
            {"id": "tools", "summary": "a"},
            {"id": "TOOLS", "summary": "b"}
        ]}"#,
    );
    assert!(matches!(
        TopicCatalog::from_path(file.path()),
        Err(ValidationError::DuplicateTopic { .. })
    ));
}

#[test]
fn empty_synonym_in_file_is_rejected() {
    let file = write_temp(r#"{"topics": [{"id": "tools", "summary": "a", "synonyms": [""]}]}"#);
    assert!(matches!(
        TopicCatalog::from_path(file.path()),
        Err(ValidationError::EmptySynonym { .. })
    ));
}

#[test]
fn portfolio_catalog_round_trips_through_file() {
    let catalog = portfolio_catalog().unwrap();
    let file = write_temp(&catalog.to_json().unwrap());
    let reloaded = TopicCatalog::from_path(file.path()).unwrap();
    assert_eq!(reloaded.digest(), catalog.digest());
}

#[test]
fn resolver_config_from_file() {
    let file = write_temp(
        r#"{"detail_trigger": "Tell me more", "match_threshold": 75, "detail_fallback": "continue_scan"}"#,
    );
    let config = ResolverConfig::from_path(file.path()).unwrap();
    assert_eq!(config.detail_fallback, DetailFallback::ContinueScan);
    assert!((config.match_threshold - 75.0).abs() < f64::EPSILON);
    assert!((config.ambiguity_margin - 10.0).abs() < f64::EPSILON);

    let engine =
        ResolutionEngine::with_config(Arc::new(portfolio_catalog().unwrap()), config).unwrap();
    let result = engine.resolve("tell me more about tools");
    assert_eq!(result.mode(), Some(ResponseMode::Detail));
}

#[test]
fn invalid_resolver_config_file_is_rejected() {
    let file = write_temp(r#"{"ambiguity_margin": 250}"#);
    assert!(matches!(
        ResolverConfig::from_path(file.path()),
        Err(ValidationError::InvalidConfig { .. })
    ));
}
