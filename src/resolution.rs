//! Topic resolution.
//!
//! [`ResolutionEngine::resolve`] maps raw input onto the catalog in three
//! stages, each either terminal or falling through to the next:
//!
//! 1. **Detail request.** If the input contains the detail trigger phrase
//!    ("more details"), topic identifiers are scanned in catalog order for a
//!    literal occurrence in the input.
//! 2. **Synonym match.** The first synonym (catalog order, then synonym order)
//!    found in the input resolves to its topic's summary.
//! 3. **Fuzzy fallback.** Identifiers are ranked by [`partial_ratio`]; a
//!    clear winner above the threshold resolves, a close runner-up makes the
//!    result ambiguous, anything else is no match.
//!
//! The engine holds only immutable data, so `resolve` is a pure function that
//! can be called concurrently without coordination.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::TopicCatalog;
use crate::error::{TopicResult, ValidationError};
use crate::format::{format_response, ResponseTemplates};
use crate::fuzzy::partial_ratio;
use crate::topic::TopicId;

/// Phrase that switches the engine into detail-seeking mode.
pub const DEFAULT_DETAIL_TRIGGER: &str = "more details";

/// Minimum score gap between the two best fuzzy candidates for a confident pick.
pub const DEFAULT_AMBIGUITY_MARGIN: f64 = 10.0;

/// The best fuzzy score must be strictly above this to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 60.0;

/// What to do when detail mode names a topic that has no detail response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailFallback {
    /// Answer with that topic's summary.
    #[default]
    SameTopicSummary,
    /// Keep scanning later identifiers; if none has detail text, fall
    /// through to synonym matching.
    ContinueScan,
}

/// Tunable resolver parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Phrase requesting a detail response. Matched case-insensitively.
    pub detail_trigger: String,
    /// Fuzzy candidates closer than this are reported as ambiguous.
    pub ambiguity_margin: f64,
    /// Fuzzy scores at or below this are no match.
    pub match_threshold: f64,
    /// Behavior for detail requests against topics without detail text.
    pub detail_fallback: DetailFallback,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            detail_trigger: DEFAULT_DETAIL_TRIGGER.to_string(),
            ambiguity_margin: DEFAULT_AMBIGUITY_MARGIN,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            detail_fallback: DetailFallback::default(),
        }
    }
}

impl ResolverConfig {
    /// Checks that the trigger is non-empty and scores lie in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` describing the first bad field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.detail_trigger.trim().is_empty() {
            return Err(invalid_config("detail_trigger cannot be empty"));
        }
        if !(0.0..=100.0).contains(&self.match_threshold) {
            return Err(invalid_config(format!(
                "match_threshold {} is out of range [0, 100]",
                self.match_threshold
            )));
        }
        if !(0.0..=100.0).contains(&self.ambiguity_margin) {
            return Err(invalid_config(format!(
                "ambiguity_margin {} is out of range [0, 100]",
                self.ambiguity_margin
            )));
        }
        Ok(())
    }

    /// Loads a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` if the file cannot be read,
    /// parsed, or fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| invalid_config(format!("failed to read {}: {e}", path.display())))?;
        let config: Self =
            serde_json::from_slice(&bytes).map_err(|e| invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid_config(reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidConfig {
        reason: reason.into(),
    }
}

/// Which response variant a resolved topic should be answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// The default, short response.
    Summary,
    /// The longer response, only for topics that carry one.
    Detail,
}

/// A topic with its fuzzy similarity to the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTopic {
    /// Candidate topic.
    pub topic: TopicId,
    /// Partial-ratio score in `[0, 100]`.
    pub score: f64,
}

/// Outcome of resolving one input. Carries no response text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// A single topic was identified.
    Resolved {
        /// The topic.
        topic: TopicId,
        /// Response variant to use.
        mode: ResponseMode,
    },
    /// Two topics scored too closely to choose; best first.
    Ambiguous {
        /// The two leading candidates.
        candidates: Vec<ScoredTopic>,
    },
    /// Nothing matched.
    NoMatch,
}

impl ResolutionResult {
    fn resolved(topic: &TopicId, mode: ResponseMode) -> Self {
        Self::Resolved {
            topic: topic.clone(),
            mode,
        }
    }

    /// The resolved topic, if any.
    #[must_use]
    pub fn topic(&self) -> Option<&TopicId> {
        match self {
            Self::Resolved { topic, .. } => Some(topic),
            _ => None,
        }
    }

    /// The response mode, if resolved.
    #[must_use]
    pub fn mode(&self) -> Option<ResponseMode> {
        match self {
            Self::Resolved { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Returns true for `Resolved`.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Returns true for `Ambiguous`.
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// Returns true for `NoMatch`.
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Stateless resolver over an injected catalog.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    catalog: Arc<TopicCatalog>,
    config: ResolverConfig,
    templates: ResponseTemplates,
}

impl ResolutionEngine {
    /// Creates an engine with default thresholds and response templates.
    #[must_use]
    pub fn new(catalog: Arc<TopicCatalog>) -> Self {
        Self {
            catalog,
            config: ResolverConfig::default(),
            templates: ResponseTemplates::default(),
        }
    }

    /// Creates an engine with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidConfig` if the configuration is invalid.
    pub fn with_config(
        catalog: Arc<TopicCatalog>,
        mut config: ResolverConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        config.detail_trigger = config.detail_trigger.to_lowercase();
        Ok(Self {
            catalog,
            config,
            templates: ResponseTemplates::default(),
        })
    }

    /// Replaces the response templates used by [`Self::format_response`].
    #[must_use]
    pub fn with_templates(mut self, templates: ResponseTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// The catalog this engine resolves against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<TopicCatalog> {
        &self.catalog
    }

    /// Active thresholds.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Response templates.
    #[must_use]
    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// Resolves raw input. Never fails; no-match and ambiguity are results.
    #[must_use]
    pub fn resolve(&self, input: &str) -> ResolutionResult {
        let normalized = input.to_lowercase();

        if let Some(result) = self.resolve_detail(&normalized) {
            return result;
        }
        if let Some(result) = self.resolve_synonym(&normalized) {
            return result;
        }
        self.resolve_fuzzy(&normalized)
    }

    /// Scores every topic identifier against the input, best first. Equal
    /// scores keep catalog order.
    #[must_use]
    pub fn rank(&self, input: &str) -> Vec<ScoredTopic> {
        self.rank_normalized(&input.to_lowercase())
    }

    /// Renders a result into response text.
    ///
    /// # Errors
    ///
    /// Returns an error only if the result names a topic this catalog cannot
    /// answer, which indicates a result produced by a different engine.
    pub fn format_response(&self, result: &ResolutionResult) -> TopicResult<String> {
        format_response(&self.catalog, &self.templates, result)
    }

    /// Resolves and renders in one step.
    ///
    /// # Errors
    ///
    /// See [`Self::format_response`].
    pub fn respond(&self, input: &str) -> TopicResult<String> {
        self.format_response(&self.resolve(input))
    }

    fn resolve_detail(&self, normalized: &str) -> Option<ResolutionResult> {
        if !normalized.contains(&self.config.detail_trigger) {
            return None;
        }

        for topic in self.catalog.all_topics() {
            if !normalized.contains(topic.id.as_str()) {
                continue;
            }
            if topic.has_detail() {
                debug!(stage = "detail", topic = %topic.id, "resolved detail request");
                return Some(ResolutionResult::resolved(&topic.id, ResponseMode::Detail));
            }
            match self.config.detail_fallback {
                DetailFallback::SameTopicSummary => {
                    debug!(
                        stage = "detail",
                        topic = %topic.id,
                        "detail unavailable, answering with summary"
                    );
                    return Some(ResolutionResult::resolved(&topic.id, ResponseMode::Summary));
                }
                DetailFallback::ContinueScan => {}
            }
        }

        debug!(stage = "detail", "no identifier in detail request, falling through");
        None
    }

    fn resolve_synonym(&self, normalized: &str) -> Option<ResolutionResult> {
        self.catalog.all_topics().iter().find_map(|topic| {
            topic.matching_synonym(normalized).map(|synonym| {
                debug!(stage = "synonym", topic = %topic.id, synonym, "resolved");
                ResolutionResult::resolved(&topic.id, ResponseMode::Summary)
            })
        })
    }

    /// The no-match floor is checked before the ambiguity gap, so a near tie
    /// between low scores is `NoMatch` rather than a clarification question.
    fn resolve_fuzzy(&self, normalized: &str) -> ResolutionResult {
        let mut ranked = self.rank_normalized(normalized).into_iter();
        let Some(top) = ranked.next() else {
            return ResolutionResult::NoMatch;
        };

        if top.score <= self.config.match_threshold {
            debug!(stage = "fuzzy", top = %top.topic, score = top.score, "below threshold");
            return ResolutionResult::NoMatch;
        }

        if let Some(second) = ranked.next() {
            if top.score - second.score < self.config.ambiguity_margin {
                debug!(
                    stage = "fuzzy",
                    first = %top.topic,
                    second = %second.topic,
                    gap = top.score - second.score,
                    "ambiguous"
                );
                return ResolutionResult::Ambiguous {
                    candidates: vec![top, second],
                };
            }
        }

        debug!(stage = "fuzzy", topic = %top.topic, score = top.score, "resolved");
        ResolutionResult::Resolved {
            topic: top.topic,
            mode: ResponseMode::Summary,
        }
    }

    fn rank_normalized(&self, normalized: &str) -> Vec<ScoredTopic> {
        let mut scored: Vec<ScoredTopic> = self
            .catalog
            .all_topics()
            .iter()
            .map(|topic| ScoredTopic {
                topic: topic.id.clone(),
                score: partial_ratio(normalized, topic.id.as_str()),
            })
            .collect();
        // Stable: ties stay in catalog order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}
