//! Fixed numeric band tables and measurement-to-query planning.
//!
//! Band edges are non-uniform by design and must match the knowledge base's
//! fact classes exactly. Composition differs per attribute:
//!
//! - Leaf length picks the single best-fit max band and min band; the two
//!   result sets are **intersected** (a species must satisfy both facts).
//! - Petal length has mutually exclusive bands; first match wins.
//! - Plant size applies **every** satisfied max and min band and unions the
//!   results before filtering. Asymmetric with leaf length on purpose.

use crate::knowledge::base::NumericBand;
use crate::types::attribute::AttributeKind;

const LEAF_MAX_BANDS: [f64; 2] = [5.0, 10.0];
const PETAL_LENGTH_BANDS: [f64; 4] = [3.0, 10.0, 20.0, 30.0];
const PLANT_MAX_BANDS: [f64; 6] = [10.0, 30.0, 50.0, 70.0, 100.0, 200.0];
const PLANT_MIN_BANDS: [f64; 4] = [1.0, 10.0, 30.0, 100.0];

/// How a measurement translates into band queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BandPlan {
    /// Best-fit max/min pair; the two query results are intersected.
    Pair { max: NumericBand, min: NumericBand },

    /// Exactly one exclusive band.
    Single(NumericBand),

    /// Every satisfied band; the query results are unioned.
    Cumulative(Vec<NumericBand>),
}

/// Plan the band queries for a measurement. `None` means the value falls
/// outside every band and contributes no evidence.
pub fn plan_for(kind: AttributeKind, value: f64) -> Option<BandPlan> {
    match kind {
        AttributeKind::LeafLength => leaf_length_plan(value),
        AttributeKind::PetalLength => petal_length_plan(value),
        AttributeKind::PlantSize => plant_size_plan(value),
        _ => None,
    }
}

fn leaf_length_plan(value: f64) -> Option<BandPlan> {
    let max = LEAF_MAX_BANDS.iter().find(|&&b| value <= b)?;
    let min = if value >= 1.0 { 1.0 } else { 0.0 };
    Some(BandPlan::Pair {
        max: NumericBand::at_most(*max),
        min: NumericBand::at_least(min),
    })
}

fn petal_length_plan(value: f64) -> Option<BandPlan> {
    let band = PETAL_LENGTH_BANDS.iter().find(|&&b| value <= b)?;
    Some(BandPlan::Single(NumericBand::at_most(*band)))
}

fn plant_size_plan(value: f64) -> Option<BandPlan> {
    let mut bands = Vec::new();
    if value <= 200.0 {
        bands.extend(
            PLANT_MAX_BANDS
                .iter()
                .filter(|&&b| value <= b)
                .map(|&b| NumericBand::at_most(b)),
        );
    }
    if value >= 1.0 {
        bands.extend(
            PLANT_MIN_BANDS
                .iter()
                .filter(|&&b| value >= b)
                .map(|&b| NumericBand::at_least(b)),
        );
    }
    if bands.is_empty() {
        None
    } else {
        Some(BandPlan::Cumulative(bands))
    }
}
