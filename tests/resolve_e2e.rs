use std::sync::Arc;

use topicwise::defaults::portfolio_catalog;
use topicwise::fuzzy::partial_ratio;
use topicwise::{
    DetailFallback, ResolutionEngine, ResolutionResult, ResolverConfig, ResponseMode, Topic,
    TopicCatalog, TopicId,
};

fn portfolio_engine() -> ResolutionEngine {
    ResolutionEngine::new(Arc::new(portfolio_catalog().unwrap()))
}

fn portfolio_engine_with(config: ResolverConfig) -> ResolutionEngine {
    ResolutionEngine::with_config(Arc::new(portfolio_catalog().unwrap()), config).unwrap()
}

fn assert_resolved(result: &ResolutionResult, topic: &str, mode: ResponseMode) {
    match result {
        ResolutionResult::Resolved { topic: t, mode: m } => {
            assert_eq!(t.as_str(), topic, "wrong topic in {result:?}");
            assert_eq!(*m, mode, "wrong mode in {result:?}");
        }
        other => panic!("expected Resolved({topic}, {mode:?}), got {other:?}"),
    }
}

fn candidate_ids(result: &ResolutionResult) -> Vec<&str> {
    let ResolutionResult::Ambiguous { candidates } = result else {
        panic!("expected ambiguous result, got {result:?}");
    };
    candidates.iter().map(|c| c.topic.as_str()).collect()
}

// ----------------------------------------------------------------------------
// Reference scenarios
// ----------------------------------------------------------------------------

#[test]
fn synonym_resolves_summary() {
    let engine = portfolio_engine();
    assert_resolved(
        &engine.resolve("tell me about your projects"),
        "projects",
        ResponseMode::Summary,
    );
}

#[test]
fn detail_request_resolves_detail() {
    let engine = portfolio_engine();
    let result = engine.resolve("more details about projects");
    assert_resolved(&result, "projects", ResponseMode::Detail);

    let text = engine.format_response(&result).unwrap();
    let projects = engine.catalog().get_str("projects").unwrap();
    assert_eq!(Some(text.as_str()), projects.detail.as_deref());
}

#[test]
fn gibberish_is_no_match() {
    let engine = portfolio_engine();
    let result = engine.resolve("xyzzy nonsense gibberish");
    assert!(result.is_no_match(), "got {result:?}");
    assert_eq!(
        engine.respond("xyzzy nonsense gibberish").unwrap(),
        "Please re-enter your question."
    );
}

#[test]
fn fuzzy_clear_winner_resolves() {
    // tools 66.7, education 44.4
    let engine = portfolio_engine();
    assert_resolved(&engine.resolve("fooling"), "tools", ResponseMode::Summary);
}

#[test]
fn fuzzy_close_pair_is_ambiguous() {
    // tools 88.9, personal 80.0
    let engine = portfolio_engine();
    let result = engine.resolve("persools");
    assert_eq!(candidate_ids(&result), vec!["tools", "personal"]);

    let text = engine.format_response(&result).unwrap();
    assert_eq!(
        text,
        "I found multiple topics you might be asking about: 'tools' (89%), 'personal' (80%). Could you clarify?"
    );
}

// ----------------------------------------------------------------------------
// Priorities and ordering
// ----------------------------------------------------------------------------

#[test]
fn matching_is_case_insensitive() {
    let engine = portfolio_engine();
    assert_resolved(
        &engine.resolve("TELL ME ABOUT YOUR PROJECTS"),
        "projects",
        ResponseMode::Summary,
    );
    assert_resolved(
        &engine.resolve("Can I get MORE DETAILS about Education?"),
        "education",
        ResponseMode::Detail,
    );
}

#[test]
fn earlier_topic_wins_synonym_tie() {
    // "about you" (personal) also occurs, but projects is registered first.
    let engine = portfolio_engine();
    assert_resolved(
        &engine.resolve("tell me about your projects"),
        "projects",
        ResponseMode::Summary,
    );
    // "work" (projects) precedes "work experience" (experience).
    assert_resolved(
        &engine.resolve("What is your work experience?"),
        "projects",
        ResponseMode::Summary,
    );
}

#[test]
fn synonym_beats_higher_fuzzy_score() {
    let engine = portfolio_engine();
    let input = "What technologies do you use";
    // achievements out-scores tools on fuzzy similarity ...
    assert!(partial_ratio(&input.to_lowercase(), "achievements") > partial_ratio(&input.to_lowercase(), "tools"));
    // ... but "technologies" is a tools synonym.
    assert_resolved(&engine.resolve(input), "tools", ResponseMode::Summary);
}

#[test]
fn multi_word_synonym_matches() {
    let engine = portfolio_engine();
    assert_resolved(&engine.resolve("Who are you?"), "personal", ResponseMode::Summary);
}

#[test]
fn detail_scan_uses_catalog_order() {
    let engine = portfolio_engine();
    assert_resolved(
        &engine.resolve("more details about your education and experience"),
        "education",
        ResponseMode::Detail,
    );
}

#[test]
fn detail_without_identifier_falls_through_to_synonyms() {
    let engine = portfolio_engine();
    assert_resolved(
        &engine.resolve("give me more details on your games"),
        "projects",
        ResponseMode::Summary,
    );
}

#[test]
fn detail_without_identifier_falls_through_to_fuzzy() {
    // No identifier, no synonym; tools scores exactly 60, which is not above the floor.
    let engine = portfolio_engine();
    assert!(engine.resolve("more details please").is_no_match());
}

#[test]
fn detail_unavailable_answers_same_topic_summary() {
    let engine = portfolio_engine();
    assert_resolved(
        &engine.resolve("More Details about personal"),
        "personal",
        ResponseMode::Summary,
    );
    // personal has no detail text, but tools (also named) must not be picked.
    assert_resolved(
        &engine.resolve("more details about personal tools"),
        "personal",
        ResponseMode::Summary,
    );
}

#[test]
fn detail_unavailable_continue_scan_policy() {
    let engine = portfolio_engine_with(ResolverConfig {
        detail_fallback: DetailFallback::ContinueScan,
        ..ResolverConfig::default()
    });
    assert_resolved(
        &engine.resolve("more details about personal tools"),
        "tools",
        ResponseMode::Detail,
    );
    // Nothing further to scan: falls through to synonyms ("achievements").
    assert_resolved(
        &engine.resolve("more details about achievements"),
        "achievements",
        ResponseMode::Summary,
    );
}

// ----------------------------------------------------------------------------
// Fuzzy thresholds
// ----------------------------------------------------------------------------

#[test]
fn typos_resolve_by_fuzzy_score() {
    let engine = portfolio_engine();
    assert_resolved(&engine.resolve("tols"), "tools", ResponseMode::Summary);
    assert_resolved(&engine.resolve("acheivments"), "achievements", ResponseMode::Summary);
    assert_resolved(&engine.resolve("whats ur educaton"), "education", ResponseMode::Summary);
}

#[test]
fn low_scoring_near_tie_is_no_match_not_ambiguous() {
    // personal 46.2 vs experience 40.0: a near tie, but below the floor.
    let engine = portfolio_engine();
    assert!(engine.resolve("xyzzy nonsense gibberish").is_no_match());
    assert!(engine.resolve("hello").is_no_match());
    assert!(engine.resolve("").is_no_match());
}

#[test]
fn widening_margin_gap_changes_outcome() {
    // persools: gap 8.9 between tools and personal.
    let strict = portfolio_engine();
    assert!(strict.resolve("persools").is_ambiguous());

    let lenient = portfolio_engine_with(ResolverConfig {
        ambiguity_margin: 8.0,
        ..ResolverConfig::default()
    });
    assert_resolved(&lenient.resolve("persools"), "tools", ResponseMode::Summary);
}

#[test]
fn raising_threshold_changes_outcome() {
    let engine = portfolio_engine_with(ResolverConfig {
        match_threshold: 70.0,
        ..ResolverConfig::default()
    });
    // tools 66.7 is no longer enough.
    assert!(engine.resolve("fooling").is_no_match());
}

#[test]
fn synthetic_catalog_ambiguity_and_resolution() {
    let catalog = TopicCatalog::builder()
        .add(Topic::new(TopicId::new("tools").unwrap(), "tools summary"))
        .unwrap()
        .add(Topic::new(TopicId::new("achievements").unwrap(), "achievements summary"))
        .unwrap()
        .build()
        .unwrap();
    let engine = ResolutionEngine::new(Arc::new(catalog));

    // tools 66.7, achievements 28.6
    assert_resolved(&engine.resolve("fooling"), "tools", ResponseMode::Summary);

    // tools 85.7, achievements 66.7
    assert_resolved(&engine.resolve("tols"), "tools", ResponseMode::Summary);

    let ranked = engine.rank("fooling");
    assert_eq!(ranked[0].topic.as_str(), "tools");
    assert!(ranked[0].score > 60.0);
    assert!(ranked[0].score - ranked[1].score >= 10.0);
}

#[test]
fn gap_equal_to_margin_resolves() {
    let engine_with = |runner_up: &str| {
        let catalog = TopicCatalog::builder()
            .add(Topic::new(TopicId::new("abcdefghij").unwrap(), "top summary"))
            .unwrap()
            .add(Topic::new(TopicId::new(runner_up).unwrap(), "runner-up summary"))
            .unwrap()
            .build()
            .unwrap();
        ResolutionEngine::new(Arc::new(catalog))
    };

    // 100.0 vs 94.7: gap below the margin.
    let close = engine_with("abcdefghiz");
    assert_eq!(
        candidate_ids(&close.resolve("abcdefghij")),
        vec!["abcdefghij", "abcdefghiz"]
    );

    // 100.0 vs 90.0: same top score, gap exactly at the margin.
    let wide = engine_with("abcdezghij");
    let ranked = wide.rank("abcdefghij");
    assert_eq!(ranked[0].score, 100.0);
    assert_eq!(ranked[0].score - ranked[1].score, 10.0);
    assert_resolved(&wide.resolve("abcdefghij"), "abcdefghij", ResponseMode::Summary);
}

// ----------------------------------------------------------------------------
// Determinism
// ----------------------------------------------------------------------------

#[test]
fn resolve_and_format_are_stable() {
    let engine = portfolio_engine();
    for input in ["persools", "tell me about your projects", "more details about tools", "zzz"] {
        let first = engine.resolve(input);
        let first_text = engine.format_response(&first).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.resolve(input), first);
            assert_eq!(engine.respond(input).unwrap(), first_text);
        }
    }
}

#[test]
fn concurrent_resolution_is_consistent() {
    let engine = Arc::new(portfolio_engine());
    let inputs = [
        "tell me about your projects",
        "more details about projects",
        "persools",
        "fooling",
        "xyzzy nonsense gibberish",
    ];
    let expected: Vec<ResolutionResult> = inputs.iter().map(|i| engine.resolve(i)).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let engine = Arc::clone(&engine);
            let expected = &expected;
            scope.spawn(move || {
                for _ in 0..50 {
                    for (input, want) in inputs.iter().zip(expected) {
                        assert_eq!(&engine.resolve(input), want);
                    }
                }
            });
        }
    });
}
