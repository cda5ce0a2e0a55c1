//! Incremental multi-attribute narrowing engine for wildflower
//! identification.
//!
//! Free-text descriptions arrive one conversational turn at a time. Each
//! turn, extraction adapters pull typed attribute values out of the text,
//! the values become knowledge-base queries, and the query results are
//! intersected into a running candidate set until one species remains or
//! every attribute has been asked about.
//!
//! # Design
//!
//! - Hard set intersection only: no ranking, no partial-match scoring.
//! - Each attribute is consumed at most once per session.
//! - The candidate set is ordered and monotonically non-growing.
//! - All session state lives in [`SessionState`]; the knowledge base is
//!   read-only and shareable across sessions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use florakey::{Engine, MemoryKnowledgeBase, SessionState};
//!
//! let base = MemoryKnowledgeBase::from_json(dataset)?;
//! let engine = Engine::new(base);
//! let mut state = SessionState::new();
//!
//! let report = engine.process_turn(&mut state, "The flowers are white.").await?;
//! if let Some(outcome) = report.outcome() {
//!     // Match or NoMatch — the session is over.
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Attribute kinds/values, species identity, session state
//! - [`extract`] - Pure extraction adapters (bucketing, vocabularies, quantities)
//! - [`knowledge`] - Knowledge-base trait and in-memory implementation
//! - [`engine`] - Band tables, question policy, and the narrowing loop

pub mod engine;
pub mod error;
pub mod extract;
pub mod knowledge;
pub mod types;

// Re-export core types at crate root
pub use engine::{next_question, prompt, BandPlan, Engine, ASK_ORDER};
pub use error::{EngineError, ExtractionError, KnowledgeError};
pub use extract::{bucket_sentences, extract, split_sentences, Topic, TopicBuckets, Unit};
pub use knowledge::{KnowledgeBase, MemoryKnowledgeBase, NumericBand, SpeciesRecord};
pub use types::{
    AttributeKind, AttributeValue, CandidateSet, Outcome, SessionState, SessionStatus, SpeciesId,
    TurnReport,
};
