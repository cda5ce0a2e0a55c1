//! Question-selection policy: a strict, fixed priority order over attribute
//! kinds. The engine always asks about the first kind not yet consumed.

use std::collections::HashSet;

use crate::types::attribute::AttributeKind;

/// The fixed order questions are asked in. Differs from declaration order:
/// leaf length ranks high because it splits the candidate set early.
pub const ASK_ORDER: [AttributeKind; 13] = [
    AttributeKind::Color,
    AttributeKind::Cluster,
    AttributeKind::Position,
    AttributeKind::LeafLength,
    AttributeKind::FlowerShape,
    AttributeKind::LeafShape,
    AttributeKind::FlowerSymmetry,
    AttributeKind::PetalLength,
    AttributeKind::PetalNumber,
    AttributeKind::LeafArrangement,
    AttributeKind::LeafDivision,
    AttributeKind::LeafMargin,
    AttributeKind::PlantSize,
];

/// The first kind in ask order not yet consumed, or `None` when every
/// attribute has been used.
pub fn next_question(consumed: &HashSet<AttributeKind>) -> Option<AttributeKind> {
    ASK_ORDER.iter().copied().find(|kind| !consumed.contains(kind))
}

/// User-facing prompt for one attribute kind.
pub fn prompt(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Color => "What color are the flowers?",
        AttributeKind::Cluster => {
            "How are the flowers clustered together? Like a ball? A spike? Or loose / sparsely clustered?"
        }
        AttributeKind::Position => {
            "How are the flowers positioned on the plant? Apical (at the top) or axillary (at the base)?"
        }
        AttributeKind::LeafLength => "How long (in cm) roughly are the plant's leaves?",
        AttributeKind::FlowerShape => {
            "What shape are the flowers? Do they look like a bell? A trumpet? Or more like a disc?"
        }
        AttributeKind::LeafShape => {
            "What shape are the plant's leaves? Are they larger near the tip or the base? Round? Straight?"
        }
        AttributeKind::FlowerSymmetry => "Is there any notable symmetry to the flowers?",
        AttributeKind::PetalLength => "How long (in mm) roughly are the petals on the flowers?",
        AttributeKind::PetalNumber => "How many petals are there on each flower?",
        AttributeKind::LeafArrangement => "How are the leaves arranged on the stalk?",
        AttributeKind::LeafDivision => "Do the leaves have lobes, or are they simple looking?",
        AttributeKind::LeafMargin => "Is there anything noticeable about the edges of the leaves?",
        AttributeKind::PlantSize => "About how tall (in cm) is the plant?",
    }
}
