//! Topic types.
//!
//! A topic is one discussable subject with a canned summary response, an
//! optional longer detail response, and an ordered list of synonym phrases.
//! Synonym order is significant: the first synonym found in the input wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Normalized topic identifier.
///
/// Identifiers are trimmed and lower-cased on construction so that they can
/// be compared directly against lower-cased user input.
///
/// # Examples
///
/// ```
/// use topicwise::TopicId;
///
/// let id = TopicId::new("  Projects ").unwrap();
/// assert_eq!(id.as_str(), "projects");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicId(String);

impl TopicId {
    /// Creates a normalized identifier.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTopicId` if nothing remains after trimming.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = id.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyTopicId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TopicId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TopicId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TopicId> for String {
    fn from(id: TopicId) -> Self {
        id.0
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable identifier, also scanned for in detail-mode requests.
    pub id: TopicId,
    /// Default response.
    pub summary: String,
    /// Longer response returned on explicit request. Topics without one
    /// cannot be answered in detail mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Synonym phrases in match-priority order.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl Topic {
    /// Creates a topic with only a summary response.
    #[must_use]
    pub fn new(id: TopicId, summary: impl Into<String>) -> Self {
        Self {
            id,
            summary: summary.into(),
            detail: None,
            synonyms: Vec::new(),
        }
    }

    /// Attaches a detail response.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Appends one synonym, lower-cased.
    #[must_use]
    pub fn with_synonym(mut self, synonym: impl AsRef<str>) -> Self {
        self.synonyms.push(synonym.as_ref().to_lowercase());
        self
    }

    /// Appends synonyms in iteration order, lower-cased.
    #[must_use]
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.synonyms
            .extend(synonyms.into_iter().map(|s| s.as_ref().to_lowercase()));
        self
    }

    /// Returns true if this topic can be answered in detail mode.
    #[must_use]
    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Returns the first synonym that occurs in `normalized_input`.
    ///
    /// The input must already be lower-cased.
    #[must_use]
    pub fn matching_synonym(&self, normalized_input: &str) -> Option<&str> {
        self.synonyms
            .iter()
            .map(String::as_str)
            .find(|synonym| normalized_input.contains(synonym))
    }

    /// Lower-cases synonyms in place. Applied at catalog registration so
    /// topics constructed field-by-field behave like builder-made ones.
    pub(crate) fn normalize(&mut self) {
        for synonym in &mut self.synonyms {
            *synonym = synonym.to_lowercase();
        }
    }

    /// Validates response texts and synonyms.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.summary.trim().is_empty() {
            return Err(ValidationError::EmptySummary {
                id: self.id.clone(),
            });
        }
        if self.detail.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(ValidationError::EmptyDetail {
                id: self.id.clone(),
            });
        }
        if self.synonyms.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptySynonym {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}
