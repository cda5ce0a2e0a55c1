//! The knowledge-base query seam consumed by the narrowing engine.
//!
//! Queries are pure reads: implementations may be shared (even concurrently)
//! across sessions. Results are always flat candidate sets; flattening nested
//! result lists is an implementation concern, never the engine's.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::KnowledgeResult;
use crate::types::attribute::AttributeKind;
use crate::types::species::CandidateSet;

/// An inclusive numeric band. One-sided in practice: the knowledge base
/// stores separate "max length" and "min length" facts, mirrored here as
/// upper-only and lower-only bands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericBand {
    /// Inclusive lower bound, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,

    /// Inclusive upper bound, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl NumericBand {
    /// A "max" band: values up to and including `upper`.
    pub fn at_most(upper: f64) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// A "min" band: values from `lower` upward.
    pub fn at_least(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Whether a value falls inside the band.
    pub fn contains(&self, value: f64) -> bool {
        self.lower.map_or(true, |l| value >= l) && self.upper.map_or(true, |u| value <= u)
    }
}

/// Read-only query surface over the species fact store.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Every known species, in stable order. Used once per session to seed
    /// the candidate set.
    async fn all_species(&self) -> KnowledgeResult<CandidateSet>;

    /// Species holding the given categorical fact. Unknown labels return an
    /// empty set, not an error.
    async fn species_by_category(
        &self,
        kind: AttributeKind,
        label: &str,
    ) -> KnowledgeResult<CandidateSet>;

    /// Species holding the given numeric band fact.
    async fn species_by_band(
        &self,
        kind: AttributeKind,
        band: NumericBand,
    ) -> KnowledgeResult<CandidateSet>;
}
