//! Typed errors for the identification library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while driving an identification session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Knowledge-base lookup failed
    #[error("knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),
}

/// Errors surfaced by `KnowledgeBase` implementations.
///
/// An unknown category label is NOT an error: lookups for labels the base
/// has never seen return an empty set.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// Backing store failed
    #[error("knowledge backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Species dataset could not be deserialized
    #[error("dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),
}

/// Errors raised by extraction adapters on malformed numeric input.
///
/// These are always recoverable: the engine downgrades them to "no evidence
/// this turn" for the affected attribute and keeps processing.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// A token mixed digits with an unrecognized unit suffix (e.g. "5x")
    #[error("malformed quantity token: {token}")]
    MalformedQuantity { token: String },

    /// A word in number position was not a recognized number word
    #[error("unrecognized number word: {word}")]
    UnknownNumberWord { word: String },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type alias for knowledge-base operations.
pub type KnowledgeResult<T> = std::result::Result<T, KnowledgeError>;

/// Result type alias for extraction adapters.
pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;
