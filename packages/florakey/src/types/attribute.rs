//! Attribute categories and extracted values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed, closed set of question categories.
///
/// Every piece of evidence a description can contribute belongs to exactly
/// one of these kinds. The order questions are asked in is a policy concern
/// (see [`crate::engine::questions`]), not a property of the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Color,
    Cluster,
    Position,
    FlowerShape,
    FlowerSymmetry,
    LeafArrangement,
    LeafDivision,
    LeafMargin,
    LeafLength,
    LeafShape,
    PetalLength,
    PetalNumber,
    PlantSize,
}

impl AttributeKind {
    /// All thirteen kinds, in declaration order.
    pub const ALL: [AttributeKind; 13] = [
        AttributeKind::Color,
        AttributeKind::Cluster,
        AttributeKind::Position,
        AttributeKind::FlowerShape,
        AttributeKind::FlowerSymmetry,
        AttributeKind::LeafArrangement,
        AttributeKind::LeafDivision,
        AttributeKind::LeafMargin,
        AttributeKind::LeafLength,
        AttributeKind::LeafShape,
        AttributeKind::PetalLength,
        AttributeKind::PetalNumber,
        AttributeKind::PlantSize,
    ];

    /// Whether this kind's evidence is a numeric measurement.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AttributeKind::LeafLength | AttributeKind::PetalLength | AttributeKind::PlantSize
        )
    }

    /// Human-readable label, used in logs and rendered output.
    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Color => "flower color",
            AttributeKind::Cluster => "cluster type",
            AttributeKind::Position => "flower position",
            AttributeKind::FlowerShape => "flower shape",
            AttributeKind::FlowerSymmetry => "flower symmetry",
            AttributeKind::LeafArrangement => "leaf arrangement",
            AttributeKind::LeafDivision => "leaf division",
            AttributeKind::LeafMargin => "leaf margin",
            AttributeKind::LeafLength => "leaf length",
            AttributeKind::LeafShape => "leaf shape",
            AttributeKind::PetalLength => "petal length",
            AttributeKind::PetalNumber => "petal number",
            AttributeKind::PlantSize => "plant size",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single extracted attribute value.
///
/// Only meaningful in combination with the [`AttributeKind`] it was extracted
/// for. Measurements are always in the kind's canonical unit: centimeters for
/// leaf length and plant size, millimeters for petal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// A categorical label from the kind's fixed vocabulary
    Label(String),

    /// A numeric measurement in the kind's canonical unit
    Measurement(f64),

    /// A unitless count (petal number)
    Count(u32),
}

impl AttributeValue {
    /// The categorical label, if this is a label value.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            AttributeValue::Label(l) => Some(l),
            _ => None,
        }
    }

    /// The measurement, if this is a measurement value.
    pub fn as_measurement(&self) -> Option<f64> {
        match self {
            AttributeValue::Measurement(v) => Some(*v),
            _ => None,
        }
    }

    /// The count, if this is a count value.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            AttributeValue::Count(n) => Some(*n),
            _ => None,
        }
    }
}
