//! # topicwise - topic-intent resolution
//!
//! topicwise decides which of a small, fixed set of topics a free-text
//! question is about, and answers with that topic's canned response.
//!
//! ## Core Concepts
//!
//! - **Topic**: an identifier, a summary response, an optional detail response,
//!   and ordered synonym phrases
//! - **TopicCatalog**: the immutable, ordered registry of topics
//! - **ResolutionEngine**: detail-request detection, synonym matching, then
//!   fuzzy fallback with ambiguity detection
//! - **ResolutionResult**: `Resolved`, `Ambiguous`, or `NoMatch`; formatting into
//!   text is a separate step
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use topicwise::{ResolutionEngine, ResponseMode, Topic, TopicCatalog, TopicId};
//!
//! let catalog = TopicCatalog::builder()
//!     .add(
//!         Topic::new(TopicId::new("projects")?, "I build games.")
//!             .with_detail("A 2D dungeon crawler in Pygame ...")
//!             .with_synonyms(["projects", "games"]),
//!     )?
//!     .build()?;
//!
//! let engine = ResolutionEngine::new(Arc::new(catalog));
//! let result = engine.resolve("Tell me about your games");
//! assert_eq!(result.mode(), Some(ResponseMode::Summary));
//!
//! let detail = engine.respond("more details about projects")?;
//! assert_eq!(detail, "A 2D dungeon crawler in Pygame ...");
//! # Ok::<(), topicwise::TopicError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod format;
pub mod fuzzy;
pub mod resolution;
pub mod topic;

/// gRPC transport (server-mode).
#[cfg(feature = "transport-grpc")]
#[allow(missing_docs)]
pub mod transport;

// Re-export primary types at crate root for convenience
pub use catalog::{TopicCatalog, TopicCatalogBuilder};
pub use error::{CatalogError, TopicError, TopicResult, TransportError, ValidationError};
pub use format::{format_response, ResponseTemplates};
pub use resolution::{
    DetailFallback, ResolutionEngine, ResolutionResult, ResolverConfig, ResponseMode, ScoredTopic,
};
pub use topic::{Topic, TopicId};
