//! Topic catalog.
//!
//! The catalog is built once at startup and is immutable afterwards. It keeps
//! topics in registration order, which is the order synonym matching and
//! ambiguity reporting follow.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CatalogError, ValidationError};
use crate::topic::{Topic, TopicId};

/// On-disk JSON shape of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    topics: Vec<Topic>,
}

/// Immutable, ordered registry of topics.
///
/// Share it behind an `Arc`; it has no interior mutability and is safe to read
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
    index: HashMap<TopicId, usize>,
}

impl TopicCatalog {
    /// Starts building a catalog.
    #[must_use]
    pub fn builder() -> TopicCatalogBuilder {
        TopicCatalogBuilder::default()
    }

    /// Looks up a topic by identifier.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownTopic` if the identifier is not registered.
    pub fn get(&self, id: &TopicId) -> Result<&Topic, CatalogError> {
        self.index
            .get(id)
            .map(|&pos| &self.topics[pos])
            .ok_or_else(|| CatalogError::UnknownTopic {
                id: id.to_string(),
            })
    }

    /// Looks up a topic by raw identifier text (normalized first).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownTopic` if the identifier is blank or not registered.
    pub fn get_str(&self, id: &str) -> Result<&Topic, CatalogError> {
        let parsed = TopicId::new(id).map_err(|_| CatalogError::UnknownTopic {
            id: id.to_string(),
        })?;
        self.get(&parsed)
    }

    /// All topics in registration order.
    #[must_use]
    pub fn all_topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Returns true if the identifier is registered.
    #[must_use]
    pub fn contains(&self, id: &TopicId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Always false for a built catalog; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Parses a catalog from a JSON document of the form
    /// `{"topics": [{"id": .., "summary": .., "detail": .., "synonyms": [..]}]}`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCatalog` on malformed JSON, or any
    /// error the builder raises for the parsed topics.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let doc: CatalogDocument =
            serde_json::from_slice(bytes).map_err(|e| ValidationError::InvalidCatalog {
                reason: e.to_string(),
            })?;
        let mut builder = Self::builder();
        for topic in doc.topics {
            builder = builder.add(topic)?;
        }
        builder.build()
    }

    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// See [`TopicCatalog::from_json_slice`].
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCatalog` if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ValidationError::InvalidCatalog {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        let catalog = Self::from_json_slice(&bytes)?;
        info!(
            path = %path.display(),
            topics = catalog.len(),
            "loaded topic catalog"
        );
        Ok(catalog)
    }

    /// Serializes the catalog back into its JSON document form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCatalog` if serialization fails.
    pub fn to_json(&self) -> Result<String, ValidationError> {
        let doc = CatalogDocument {
            topics: self.topics.clone(),
        };
        serde_json::to_string_pretty(&doc).map_err(|e| ValidationError::InvalidCatalog {
            reason: e.to_string(),
        })
    }

    /// Stable content digest (hex blake3) over identifiers, texts and
    /// synonyms in order. Two catalogs that resolve identically hash equally.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for topic in &self.topics {
            hash_field(&mut hasher, topic.id.as_str());
            hash_field(&mut hasher, &topic.summary);
            match &topic.detail {
                Some(detail) => {
                    hasher.update(&[1u8]);
                    hash_field(&mut hasher, detail);
                }
                None => {
                    hasher.update(&[0u8]);
                }
            }
            hasher.update(&(topic.synonyms.len() as u64).to_le_bytes());
            for synonym in &topic.synonyms {
                hash_field(&mut hasher, synonym);
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

// Length-prefixed so adjacent fields cannot collide.
fn hash_field(hasher: &mut blake3::Hasher, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Builder for [`TopicCatalog`].
#[derive(Debug, Default)]
pub struct TopicCatalogBuilder {
    topics: Vec<Topic>,
    index: HashMap<TopicId, usize>,
}

impl TopicCatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a topic at the end of the catalog order.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the topic is invalid or its identifier
    /// is already registered.
    pub fn add(mut self, mut topic: Topic) -> Result<Self, ValidationError> {
        topic.normalize();
        topic.validate()?;
        if self.index.contains_key(&topic.id) {
            return Err(ValidationError::DuplicateTopic { id: topic.id });
        }
        self.index.insert(topic.id.clone(), self.topics.len());
        self.topics.push(topic);
        Ok(self)
    }

    /// Finalizes the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyCatalog` if no topic was registered.
    pub fn build(self) -> Result<TopicCatalog, ValidationError> {
        if self.topics.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }
        Ok(TopicCatalog {
            topics: self.topics,
            index: self.index,
        })
    }
}
