//! Species identity and the ordered candidate set.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a species in the knowledge base.
///
/// The display name doubles as identity; datasets use the binomial name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(String);

impl SpeciesId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpeciesId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SpeciesId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// An ordered collection of species with no duplicates.
///
/// Insertion order from the initial all-species query is preserved through
/// every intersection, so session output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    species: IndexSet<SpeciesId>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn contains(&self, id: &SpeciesId) -> bool {
        self.species.contains(id)
    }

    /// Add a species. Returns false if it was already present.
    pub fn insert(&mut self, id: SpeciesId) -> bool {
        self.species.insert(id)
    }

    /// The only remaining species, if exactly one remains.
    pub fn sole_candidate(&self) -> Option<&SpeciesId> {
        if self.species.len() == 1 {
            self.species.first()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesId> {
        self.species.iter()
    }

    pub fn to_vec(&self) -> Vec<SpeciesId> {
        self.species.iter().cloned().collect()
    }

    /// Species present in both sets, in this set's insertion order.
    pub fn intersect(&self, other: &CandidateSet) -> CandidateSet {
        CandidateSet {
            species: self
                .species
                .iter()
                .filter(|id| other.contains(id))
                .cloned()
                .collect(),
        }
    }

    /// Add every species from `other`, keeping first-seen order.
    pub fn union_with(&mut self, other: &CandidateSet) {
        for id in other.iter() {
            self.species.insert(id.clone());
        }
    }

    /// Whether every species here is also in `other`.
    pub fn is_subset(&self, other: &CandidateSet) -> bool {
        self.species.iter().all(|id| other.contains(id))
    }
}

impl FromIterator<SpeciesId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = SpeciesId>>(iter: I) -> Self {
        Self {
            species: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a SpeciesId;
    type IntoIter = indexmap::set::Iter<'a, SpeciesId>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}
