//! Extraction adapters: pure functions turning normalized sentences into
//! typed attribute values.
//!
//! Adapters are side-effect-free and may return multiple values (e.g. two
//! colors mentioned in one turn). Numeric adapters return at most one value,
//! already converted to the attribute's canonical unit. An empty result is
//! never an error; it means "no evidence this turn".

pub mod categorical;
pub mod numeric;
pub mod text;

pub use numeric::Unit;
pub use text::{bucket_sentences, split_sentences, Topic, TopicBuckets};

use crate::error::ExtractionResult;
use crate::types::attribute::{AttributeKind, AttributeValue};

/// Run the adapter for one attribute kind over its bucketed sentences.
pub fn extract(
    kind: AttributeKind,
    sentences: &[String],
) -> ExtractionResult<Vec<AttributeValue>> {
    match kind {
        AttributeKind::LeafLength | AttributeKind::PlantSize => {
            let value = numeric::extract_quantity(Unit::Centimeters, sentences)?;
            Ok(value.map(AttributeValue::Measurement).into_iter().collect())
        }
        AttributeKind::PetalLength => {
            let value = numeric::extract_quantity(Unit::Millimeters, sentences)?;
            Ok(value.map(AttributeValue::Measurement).into_iter().collect())
        }
        AttributeKind::PetalNumber => Ok(numeric::extract_petal_count(sentences)
            .map(AttributeValue::Count)
            .into_iter()
            .collect()),
        _ => {
            let labels = categorical::scan_labels(categorical::vocabulary(kind), sentences);
            Ok(labels.into_iter().map(AttributeValue::Label).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sents(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn categorical_dispatch() {
        let values = extract(
            AttributeKind::Color,
            &sents(&["the flowers are white and pink"]),
        )
        .unwrap();
        assert_eq!(
            values,
            vec![
                AttributeValue::Label("pink".into()),
                AttributeValue::Label("white".into()),
            ]
        );
    }

    #[test]
    fn leaf_length_in_canonical_centimeters() {
        let values =
            extract(AttributeKind::LeafLength, &sents(&["the leaves are 30mm long"])).unwrap();
        assert_eq!(values, vec![AttributeValue::Measurement(3.0)]);
    }

    #[test]
    fn petal_length_in_canonical_millimeters() {
        let values =
            extract(AttributeKind::PetalLength, &sents(&["the petals are 2cm long"])).unwrap();
        assert_eq!(values, vec![AttributeValue::Measurement(20.0)]);
    }

    #[test]
    fn petal_number_dispatch() {
        let values =
            extract(AttributeKind::PetalNumber, &sents(&["4 petals on each one"])).unwrap();
        assert_eq!(values, vec![AttributeValue::Count(4)]);
    }

    #[test]
    fn empty_input_is_no_evidence() {
        assert!(extract(AttributeKind::Color, &[]).unwrap().is_empty());
        assert!(extract(AttributeKind::LeafLength, &[]).unwrap().is_empty());
    }
}
