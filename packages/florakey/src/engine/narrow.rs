//! The narrowing engine: one conversational turn end to end.

use tracing::{debug, info, warn};

use crate::engine::bands::{plan_for, BandPlan};
use crate::engine::questions;
use crate::error::Result;
use crate::extract::{self, bucket_sentences, split_sentences};
use crate::knowledge::base::KnowledgeBase;
use crate::types::attribute::{AttributeKind, AttributeValue};
use crate::types::session::{SessionState, SessionStatus, TurnReport};
use crate::types::species::CandidateSet;

/// The incremental multi-attribute narrowing engine.
///
/// Owns the knowledge base; per-conversation state lives in
/// [`SessionState`], so one engine serves any number of sessions.
pub struct Engine<K: KnowledgeBase> {
    knowledge: K,
}

impl<K: KnowledgeBase> Engine<K> {
    pub fn new(knowledge: K) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &K {
        &self.knowledge
    }

    /// Process one turn of free text: extract evidence, query the knowledge
    /// base, intersect into the candidate set, and report.
    ///
    /// Extraction failures are downgraded to absent evidence per attribute;
    /// only knowledge-base failures abort the turn.
    pub async fn process_turn(
        &self,
        state: &mut SessionState,
        text: &str,
    ) -> Result<TurnReport> {
        let sentences = split_sentences(text);
        let buckets = bucket_sentences(&sentences);
        debug!(
            turn = state.turn(),
            sentences = sentences.len(),
            "Bucketed turn input"
        );

        if state.candidates().is_none() {
            let universe = self.knowledge.all_species().await?;
            info!(species = universe.len(), "Seeded candidate universe");
            state.seed(universe);
        }

        let mut applied = Vec::new();
        for kind in questions::ASK_ORDER {
            if state.is_consumed(kind) {
                continue;
            }

            let kind_sentences = buckets.for_kind(kind);
            if kind_sentences.is_empty() {
                continue;
            }

            let values = match extract::extract(kind, &kind_sentences) {
                Ok(values) => values,
                Err(error) => {
                    warn!(kind = %kind, %error, "Extraction failed; treating as no evidence");
                    continue;
                }
            };
            if values.is_empty() {
                continue;
            }

            let Some(filter) = self.filter_for(kind, &values).await? else {
                continue;
            };
            if filter.is_empty() {
                debug!(kind = %kind, "Query matched no species; attribute left open");
                continue;
            }

            state.narrow(&filter);
            state.mark_consumed(kind);
            applied.push(kind);
            info!(
                kind = %kind,
                remaining = state.candidates().map_or(0, |c| c.len()),
                "Applied attribute filter"
            );
        }

        state.advance_turn();

        let candidates = state.candidates().map(CandidateSet::to_vec).unwrap_or_default();
        let status = if candidates.len() <= 1 {
            SessionStatus::Resolved
        } else {
            SessionStatus::Active
        };
        let next_question = match status {
            SessionStatus::Resolved => None,
            SessionStatus::Active => questions::next_question(state.consumed()),
        };

        Ok(TurnReport {
            candidates,
            applied,
            next_question,
            status,
        })
    }

    /// Translate extracted values into the per-attribute filter set.
    ///
    /// Same-kind category results are unioned; numeric bands compose per the
    /// band plan (pair intersection, single band, or cumulative union).
    async fn filter_for(
        &self,
        kind: AttributeKind,
        values: &[AttributeValue],
    ) -> Result<Option<CandidateSet>> {
        match values.first() {
            Some(AttributeValue::Label(_)) => {
                let mut filter = CandidateSet::new();
                for label in values.iter().filter_map(AttributeValue::as_label) {
                    let result = self.knowledge.species_by_category(kind, label).await?;
                    filter.union_with(&result);
                }
                Ok(Some(filter))
            }
            Some(AttributeValue::Count(n)) => self.count_filter(kind, *n).await,
            Some(AttributeValue::Measurement(v)) => self.band_filter(kind, *v).await,
            None => Ok(None),
        }
    }

    async fn count_filter(&self, kind: AttributeKind, count: u32) -> Result<Option<CandidateSet>> {
        // Only counts the knowledge base stores facts for translate to
        // queries; anything else is no evidence.
        if !(3..=5).contains(&count) {
            debug!(kind = %kind, count, "Count outside known petal numbers");
            return Ok(None);
        }
        let filter = self
            .knowledge
            .species_by_category(kind, &count.to_string())
            .await?;
        Ok(Some(filter))
    }

    async fn band_filter(&self, kind: AttributeKind, value: f64) -> Result<Option<CandidateSet>> {
        let Some(plan) = plan_for(kind, value) else {
            debug!(kind = %kind, value, "Measurement outside every band");
            return Ok(None);
        };

        let filter = match plan {
            BandPlan::Pair { max, min } => {
                let max_set = self.knowledge.species_by_band(kind, max).await?;
                let min_set = self.knowledge.species_by_band(kind, min).await?;
                max_set.intersect(&min_set)
            }
            BandPlan::Single(band) => self.knowledge.species_by_band(kind, band).await?,
            BandPlan::Cumulative(bands) => {
                let mut union = CandidateSet::new();
                for band in bands {
                    let result = self.knowledge.species_by_band(kind, band).await?;
                    union.union_with(&result);
                }
                union
            }
        };
        Ok(Some(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::base::NumericBand;
    use crate::knowledge::memory::{MemoryKnowledgeBase, SpeciesRecord};
    use crate::types::species::SpeciesId;

    fn engine() -> Engine<MemoryKnowledgeBase> {
        let records = vec![
            SpeciesRecord::new("short-and-rooted")
                .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0))
                .with_band(AttributeKind::LeafLength, NumericBand::at_least(1.0)),
            SpeciesRecord::new("short-only")
                .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0)),
            SpeciesRecord::new("unrelated").with_label(AttributeKind::Color, "blue"),
        ];
        Engine::new(MemoryKnowledgeBase::from_records(records))
    }

    #[tokio::test]
    async fn leaf_length_filter_intersects_max_and_min_results() {
        let engine = engine();
        let filter = engine
            .band_filter(AttributeKind::LeafLength, 3.0)
            .await
            .unwrap()
            .unwrap();

        // Never the union: only species holding BOTH the max-5 and min-1
        // facts survive.
        assert_eq!(filter.to_vec(), vec![SpeciesId::from("short-and-rooted")]);
    }

    #[tokio::test]
    async fn count_filter_ignores_unknown_counts() {
        let engine = engine();
        assert!(engine
            .count_filter(AttributeKind::PetalNumber, 7)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn category_filter_unions_labels() {
        let records = vec![
            SpeciesRecord::new("a").with_label(AttributeKind::Color, "white"),
            SpeciesRecord::new("b").with_label(AttributeKind::Color, "pink"),
            SpeciesRecord::new("c").with_label(AttributeKind::Color, "blue"),
        ];
        let engine = Engine::new(MemoryKnowledgeBase::from_records(records));

        let filter = engine
            .filter_for(
                AttributeKind::Color,
                &[
                    AttributeValue::Label("white".into()),
                    AttributeValue::Label("pink".into()),
                ],
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(filter.len(), 2);
    }
}
