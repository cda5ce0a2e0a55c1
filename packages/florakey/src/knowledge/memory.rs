//! In-memory knowledge base built from species records.
//!
//! Backs both the CLI (seeded from an embedded JSON dataset) and tests.
//! Immutable after construction, so it needs no interior locking and can be
//! shared freely across sessions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::KnowledgeResult;
use crate::knowledge::base::{KnowledgeBase, NumericBand};
use crate::types::attribute::AttributeKind;
use crate::types::species::{CandidateSet, SpeciesId};

/// All known facts for one species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: SpeciesId,

    /// Categorical facts per kind (a species can hold several labels for one
    /// kind, e.g. white and pink flowers)
    #[serde(default)]
    pub labels: HashMap<AttributeKind, Vec<String>>,

    /// Numeric band facts per kind (every band the species belongs to)
    #[serde(default)]
    pub bands: HashMap<AttributeKind, Vec<NumericBand>>,
}

impl SpeciesRecord {
    pub fn new(id: impl Into<SpeciesId>) -> Self {
        Self {
            id: id.into(),
            labels: HashMap::new(),
            bands: HashMap::new(),
        }
    }

    /// Add a categorical fact.
    pub fn with_label(mut self, kind: AttributeKind, label: impl Into<String>) -> Self {
        self.labels.entry(kind).or_default().push(label.into());
        self
    }

    /// Add a numeric band fact.
    pub fn with_band(mut self, kind: AttributeKind, band: NumericBand) -> Self {
        self.bands.entry(kind).or_default().push(band);
        self
    }
}

/// In-memory fact store indexed at construction time.
#[derive(Debug)]
pub struct MemoryKnowledgeBase {
    universe: CandidateSet,
    by_label: HashMap<(AttributeKind, String), CandidateSet>,
    // NumericBand holds f64 bounds, so band keys live in a scan list rather
    // than a hash map. The fixed band tables keep this list tiny.
    by_band: Vec<(AttributeKind, NumericBand, CandidateSet)>,
}

impl MemoryKnowledgeBase {
    /// Build the indexes from species records. Record order fixes the
    /// candidate universe order for every session.
    pub fn from_records(records: impl IntoIterator<Item = SpeciesRecord>) -> Self {
        let mut universe = CandidateSet::new();
        let mut by_label: HashMap<(AttributeKind, String), CandidateSet> = HashMap::new();
        let mut by_band: Vec<(AttributeKind, NumericBand, CandidateSet)> = Vec::new();

        for record in records {
            universe.insert(record.id.clone());

            for (kind, labels) in record.labels {
                for label in labels {
                    by_label
                        .entry((kind, label))
                        .or_default()
                        .insert(record.id.clone());
                }
            }

            for (kind, bands) in record.bands {
                for band in bands {
                    match by_band.iter_mut().find(|(k, b, _)| *k == kind && *b == band) {
                        Some((_, _, set)) => {
                            set.insert(record.id.clone());
                        }
                        None => {
                            let mut set = CandidateSet::new();
                            set.insert(record.id.clone());
                            by_band.push((kind, band, set));
                        }
                    }
                }
            }
        }

        Self {
            universe,
            by_label,
            by_band,
        }
    }

    /// Build from a JSON array of species records.
    pub fn from_json(json: &str) -> KnowledgeResult<Self> {
        let records: Vec<SpeciesRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn species_count(&self) -> usize {
        self.universe.len()
    }
}

#[async_trait]
impl KnowledgeBase for MemoryKnowledgeBase {
    async fn all_species(&self) -> KnowledgeResult<CandidateSet> {
        Ok(self.universe.clone())
    }

    async fn species_by_category(
        &self,
        kind: AttributeKind,
        label: &str,
    ) -> KnowledgeResult<CandidateSet> {
        Ok(self
            .by_label
            .get(&(kind, label.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn species_by_band(
        &self,
        kind: AttributeKind,
        band: NumericBand,
    ) -> KnowledgeResult<CandidateSet> {
        Ok(self
            .by_band
            .iter()
            .find(|(k, b, _)| *k == kind && *b == band)
            .map(|(_, _, set)| set.clone())
            .unwrap_or_default())
    }
}
