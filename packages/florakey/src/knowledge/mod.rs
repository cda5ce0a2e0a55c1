//! Knowledge-base trait seam and the in-memory implementation.

pub mod base;
pub mod memory;

pub use base::{KnowledgeBase, NumericBand};
pub use memory::{MemoryKnowledgeBase, SpeciesRecord};
