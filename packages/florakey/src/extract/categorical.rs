//! Categorical adapters: fixed per-kind vocabularies with botanical and
//! colloquial synonyms, scanned by substring over normalized sentences.

use crate::types::attribute::AttributeKind;

/// A categorical vocabulary: canonical label plus the synonyms that map to it.
pub type Vocabulary = &'static [(&'static str, &'static [&'static str])];

const COLORS: Vocabulary = &[
    ("blue", &["blue", "aqua", "navy", "marine", "cornflower", "midnight", "royal"]),
    ("green", &["green", "lime", "forest", "moss", "olive", "sage"]),
    ("orange", &["orange", "salmon", "coral", "sienna"]),
    ("pink", &["pink", "orchid", "magenta", "grapefruit"]),
    ("purple", &["purple", "plum", "violet", "indigo"]),
    ("red", &["red", "maroon", "scarlet", "vermillion"]),
    ("transparent", &["transparent", "clear", "see through", "seethrough"]),
    ("white", &["white", "gray", "snow", "silver"]),
    ("yellow", &["yellow", "goldenrod", "khaki", "wheat", "tan"]),
];

const CLUSTERS: Vocabulary = &[
    ("ball", &["ball", "round", "sphere", "circle"]),
    ("few", &["few", "solo", "alone", "apart", "corumb", "cyme"]),
    ("loose", &["loose", "separate", "panicle", "thyrse"]),
    ("spike", &["spike", "cone", "rod", "vertical", "raceme"]),
];

const POSITIONS: Vocabulary = &[
    ("apical", &["apical", "tip", "on top"]),
    ("axillary", &["axillary", "at bottom", "bottom of"]),
];

const FLOWER_SHAPES: Vocabulary = &[
    ("bell", &["bell", "tubular", "cup", "saucer", "trumpet", "funnel"]),
    ("rayed", &["rayed", "flat", "stellate", "salverform", "disc"]),
];

const FLOWER_SYMMETRIES: Vocabulary = &[
    ("radial", &["radial"]),
    ("none", &["asymmetrical"]),
];

const LEAF_ARRANGEMENTS: Vocabulary = &[
    ("basal", &["basal", "bottom", "ground", "base"]),
    ("opposite", &["opposite", "matched", "symmetrical"]),
    ("whorled", &["whorled", "circular", "circle"]),
];

const LEAF_DIVISIONS: Vocabulary = &[
    ("simple", &["simple", "unlobed"]),
    ("complex", &["complex"]),
];

const LEAF_MARGINS: Vocabulary = &[("hairy", &["hairy", "fuzzy"])];

const LEAF_SHAPES: Vocabulary = &[
    ("heart", &["heart", "round", "cordate", "sinuate", "orbicular", "reniform"]),
    ("linear", &["linear", "elliptic", "sessile", "lanceolate", "oblong"]),
    ("widerMiddle", &["middle", "ovate", "rhomboid"]),
    ("widerTip", &["tip", "obovate"]),
];

/// The vocabulary for a kind. Numeric kinds have no vocabulary.
pub fn vocabulary(kind: AttributeKind) -> Vocabulary {
    match kind {
        AttributeKind::Color => COLORS,
        AttributeKind::Cluster => CLUSTERS,
        AttributeKind::Position => POSITIONS,
        AttributeKind::FlowerShape => FLOWER_SHAPES,
        AttributeKind::FlowerSymmetry => FLOWER_SYMMETRIES,
        AttributeKind::LeafArrangement => LEAF_ARRANGEMENTS,
        AttributeKind::LeafDivision => LEAF_DIVISIONS,
        AttributeKind::LeafMargin => LEAF_MARGINS,
        AttributeKind::LeafShape => LEAF_SHAPES,
        AttributeKind::LeafLength
        | AttributeKind::PetalLength
        | AttributeKind::PetalNumber
        | AttributeKind::PlantSize => &[],
    }
}

/// Scan sentences for synonym hits and return the matched canonical labels,
/// deduplicated in first-seen order.
pub fn scan_labels(vocab: Vocabulary, sentences: &[String]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for sentence in sentences {
        for (label, synonyms) in vocab {
            if synonyms.iter().any(|syn| sentence.contains(syn))
                && !found.iter().any(|f| f == label)
            {
                found.push((*label).to_string());
            }
        }
    }
    found
}
