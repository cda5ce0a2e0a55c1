//! Core data types: attribute kinds and values, species identity, the
//! ordered candidate set, and per-session state.

pub mod attribute;
pub mod session;
pub mod species;

pub use attribute::{AttributeKind, AttributeValue};
pub use session::{Outcome, SessionState, SessionStatus, TurnReport};
pub use species::{CandidateSet, SpeciesId};
