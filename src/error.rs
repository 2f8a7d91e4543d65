//! Error types for topicwise.
//!
//! All errors are strongly typed using thiserror. Note that "no match" and
//! "ambiguous" are not errors: they are ordinary [`ResolutionResult`]
//! variants returned by the engine.
//!
//! [`ResolutionResult`]: crate::resolution::ResolutionResult

use thiserror::Error;

use crate::topic::TopicId;

/// Catalog lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown topic: {id}")]
    UnknownTopic {
        id: String,
    },
}

/// Validation errors raised while building a catalog or configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Topic identifier cannot be empty")]
    EmptyTopicId,

    #[error("Topic '{id}' has an empty summary response")]
    EmptySummary {
        id: TopicId,
    },

    #[error("Topic '{id}' has an empty detail response")]
    EmptyDetail {
        id: TopicId,
    },

    #[error("Topic '{id}' has an empty synonym")]
    EmptySynonym {
        id: TopicId,
    },

    #[error("Topic '{id}' is registered more than once")]
    DuplicateTopic {
        id: TopicId,
    },

    #[error("Catalog must contain at least one topic")]
    EmptyCatalog,

    #[error("Invalid catalog: {reason}")]
    InvalidCatalog {
        reason: String,
    },

    #[error("Invalid resolver configuration: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("Input is {actual} bytes, maximum is {max}")]
    InputTooLong {
        actual: usize,
        max: usize,
    },
}

/// Transport errors for the server binary.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to bind {addr}: {message}")]
    BindFailed {
        addr: String,
        message: String,
    },

    #[error("Server failed: {message}")]
    ServeFailed {
        message: String,
    },
}

/// Top-level error type for topicwise.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl TopicError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a catalog error.
    #[must_use]
    pub const fn is_catalog(&self) -> bool {
        matches!(self, Self::Catalog(_))
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a transport error.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Returns true if this error is retryable.
    ///
    /// Resolution is local and deterministic, so only a failed bind can
    /// succeed on a second attempt.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(TransportError::BindFailed { .. }))
    }
}

/// Result type alias for topicwise operations.
pub type TopicResult<T> = Result<T, TopicError>;
