//! Response text composition.
//!
//! Kept apart from resolution so the engine never deals with presentation.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::catalog::TopicCatalog;
use crate::error::{TopicError, TopicResult};
use crate::resolution::{ResolutionResult, ResponseMode};

/// Fixed strings used when rendering results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    /// Appended to every summary response.
    pub detail_hint: String,
    /// Returned when nothing matched.
    pub no_match: String,
    /// Leads the candidate list of an ambiguous result.
    pub ambiguity_prefix: String,
    /// Follows the candidate list of an ambiguous result.
    pub ambiguity_suffix: String,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            detail_hint: " If you'd like to hear more, ask me for \"more details\" about this topic."
                .to_string(),
            no_match: "Please re-enter your question.".to_string(),
            ambiguity_prefix: "I found multiple topics you might be asking about: ".to_string(),
            ambiguity_suffix: ". Could you clarify?".to_string(),
        }
    }
}

/// Renders a resolution result against `catalog`.
///
/// * `Resolved` + `Summary`: summary text followed by the detail hint.
/// * `Resolved` + `Detail`: detail text alone.
/// * `Ambiguous`: each candidate as `'id' (NN%)`, comma separated.
/// * `NoMatch`: the re-entry prompt.
///
/// # Errors
///
/// Returns `TopicError::Catalog` if the topic is not registered, and
/// `TopicError::Internal` if detail mode names a topic without detail text.
pub fn format_response(
    catalog: &TopicCatalog,
    templates: &ResponseTemplates,
    result: &ResolutionResult,
) -> TopicResult<String> {
    match result {
        ResolutionResult::Resolved { topic, mode } => {
            let topic = catalog.get(topic)?;
            match mode {
                ResponseMode::Summary => Ok(format!("{}{}", topic.summary, templates.detail_hint)),
                ResponseMode::Detail => topic.detail.clone().ok_or_else(|| {
                    TopicError::internal(format!(
                        "detail response requested for topic '{}' which has none",
                        topic.id
                    ))
                }),
            }
        }
        ResolutionResult::Ambiguous { candidates } => {
            let mut out = templates.ambiguity_prefix.clone();
            for (i, candidate) in candidates.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                // Writing to a String cannot fail.
                let _ = write!(out, "'{}' ({:.0}%)", candidate.topic, candidate.score);
            }
            out.push_str(&templates.ambiguity_suffix);
            Ok(out)
        }
        ResolutionResult::NoMatch => Ok(templates.no_match.clone()),
    }
}
