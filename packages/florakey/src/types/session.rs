//! Per-session state and per-turn reporting.
//!
//! All mutable conversation state lives in `SessionState`: every
//! conversation owns one instance, so multiple sessions can run side by side
//! against the same knowledge base.

use serde::Serialize;
use std::collections::HashSet;

use crate::types::attribute::AttributeKind;
use crate::types::species::{CandidateSet, SpeciesId};

/// Whether a session is still narrowing or has reached a terminal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// More than one candidate remains; keep asking.
    Active,

    /// At most one candidate remains. Terminal for the session.
    Resolved,
}

/// Terminal answer of a resolved session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Exactly one species is consistent with all applied evidence.
    Match(SpeciesId),

    /// The attribute combination is inconsistent with every known species.
    /// A valid, expected terminal state, not an error.
    NoMatch,
}

/// Mutable state for one identification conversation.
///
/// Invariants maintained by the engine:
/// - `candidates` is monotonically non-growing across turns.
/// - A kind enters `consumed` iff its query produced a non-empty filter that
///   turn, and it never leaves.
#[derive(Debug, Default)]
pub struct SessionState {
    consumed: HashSet<AttributeKind>,
    candidates: Option<CandidateSet>,
    turn: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed turns.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Attributes already applied as filters.
    pub fn consumed(&self) -> &HashSet<AttributeKind> {
        &self.consumed
    }

    pub fn is_consumed(&self, kind: AttributeKind) -> bool {
        self.consumed.contains(&kind)
    }

    /// Current candidates. `None` until the first turn seeds the universe.
    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.candidates.as_ref()
    }

    pub(crate) fn seed(&mut self, universe: CandidateSet) {
        self.candidates = Some(universe);
    }

    pub(crate) fn narrow(&mut self, filter: &CandidateSet) {
        if let Some(current) = &self.candidates {
            self.candidates = Some(current.intersect(filter));
        }
    }

    pub(crate) fn mark_consumed(&mut self, kind: AttributeKind) {
        self.consumed.insert(kind);
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }
}

/// Everything the session loop needs to render one turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    /// Remaining candidates, in stable narrowing order
    pub candidates: Vec<SpeciesId>,

    /// Attribute kinds whose filters were applied this turn
    pub applied: Vec<AttributeKind>,

    /// Next attribute to ask about, or `None` when either the session is
    /// resolved or every attribute has been consumed
    pub next_question: Option<AttributeKind>,

    /// Narrowing state after this turn's intersections
    pub status: SessionStatus,
}

impl TurnReport {
    /// Terminal answer, present only once the session is resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.status != SessionStatus::Resolved {
            return None;
        }
        match self.candidates.first() {
            Some(species) if self.candidates.len() == 1 => Some(Outcome::Match(species.clone())),
            Some(_) => None,
            None => Some(Outcome::NoMatch),
        }
    }

    /// True when the session is still active but there is nothing left to
    /// ask. Informational, not an error.
    pub fn questions_exhausted(&self) -> bool {
        self.status == SessionStatus::Active && self.next_question.is_none()
    }
}
