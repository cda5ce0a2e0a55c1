//! Sentence normalization and topic bucketing.
//!
//! Pure text preparation: raw turn input is split into sentences, stripped
//! of punctuation, lowercased, and routed into one of four topic buckets by
//! keyword priority. Adapters then read only the bucket(s) relevant to their
//! attribute kind.

use crate::types::attribute::AttributeKind;

/// The four sentence topic buckets. Each sentence lands in exactly one;
/// the first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Flower,
    Leaf,
    Petal,
    /// Catch-all for sentences about the plant as a whole.
    Plant,
}

/// Sentences for one turn, grouped by topic.
#[derive(Debug, Clone, Default)]
pub struct TopicBuckets {
    flower: Vec<String>,
    leaf: Vec<String>,
    petal: Vec<String>,
    plant: Vec<String>,
}

impl TopicBuckets {
    pub fn for_topic(&self, topic: Topic) -> &[String] {
        match topic {
            Topic::Flower => &self.flower,
            Topic::Leaf => &self.leaf,
            Topic::Petal => &self.petal,
            Topic::Plant => &self.plant,
        }
    }

    /// The sentences an attribute kind's adapter should read, in input
    /// order. Color spans the flower and petal buckets; everything else
    /// reads a single bucket.
    pub fn for_kind(&self, kind: AttributeKind) -> Vec<String> {
        topics_for(kind)
            .iter()
            .flat_map(|t| self.for_topic(*t).iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.flower.is_empty() && self.leaf.is_empty() && self.petal.is_empty() && self.plant.is_empty()
    }
}

/// Which bucket(s) feed each attribute kind.
pub fn topics_for(kind: AttributeKind) -> &'static [Topic] {
    match kind {
        // Petal-colored descriptions count as flower color too.
        AttributeKind::Color => &[Topic::Flower, Topic::Petal],
        AttributeKind::Cluster
        | AttributeKind::Position
        | AttributeKind::FlowerShape
        | AttributeKind::FlowerSymmetry => &[Topic::Flower],
        AttributeKind::LeafArrangement
        | AttributeKind::LeafDivision
        | AttributeKind::LeafMargin
        | AttributeKind::LeafLength
        | AttributeKind::LeafShape => &[Topic::Leaf],
        AttributeKind::PetalLength | AttributeKind::PetalNumber => &[Topic::Petal],
        AttributeKind::PlantSize => &[Topic::Plant],
    }
}

/// Split raw turn text into normalized sentences: sentence-boundary split,
/// punctuation stripped, lowercased. Empty sentences are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect()
}

fn normalize(sentence: &str) -> String {
    let stripped: String = sentence
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Route normalized sentences into topic buckets by keyword priority:
/// "flower"/"flor" beats "leaf"/"leaves" beats "petal"; anything else is
/// about the plant as a whole.
pub fn bucket_sentences(sentences: &[String]) -> TopicBuckets {
    let mut buckets = TopicBuckets::default();
    for sentence in sentences {
        if sentence.contains("flower") || sentence.contains("flor") {
            buckets.flower.push(sentence.clone());
        } else if sentence.contains("leaf") || sentence.contains("leaves") {
            buckets.leaf.push(sentence.clone());
        } else if sentence.contains("petal") {
            buckets.petal.push(sentence.clone());
        } else {
            buckets.plant.push(sentence.clone());
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_normalizes() {
        let sentences = split_sentences("The flowers are WHITE! They're small.");
        assert_eq!(sentences, vec!["the flowers are white", "theyre small"]);
    }

    #[test]
    fn drops_empty_sentences() {
        assert!(split_sentences("...!?").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn keeps_attached_units() {
        let sentences = split_sentences("The leaves are 4cm long.");
        assert_eq!(sentences, vec!["the leaves are 4cm long"]);
    }

    #[test]
    fn first_matching_bucket_wins() {
        let sentences = split_sentences(
            "The flower has white petals. The leaves are long. There are 4 petals. It is tall.",
        );
        let buckets = bucket_sentences(&sentences);

        // "petals" appears in the first sentence, but "flower" matched first.
        assert_eq!(buckets.for_topic(Topic::Flower).len(), 1);
        assert_eq!(buckets.for_topic(Topic::Leaf).len(), 1);
        assert_eq!(buckets.for_topic(Topic::Petal).len(), 1);
        assert_eq!(buckets.for_topic(Topic::Plant).len(), 1);
    }

    #[test]
    fn color_reads_flower_and_petal_buckets() {
        let sentences = split_sentences("The flowers are loose. The petals are pink.");
        let buckets = bucket_sentences(&sentences);

        let color_sents = buckets.for_kind(AttributeKind::Color);
        assert_eq!(color_sents.len(), 2);

        let cluster_sents = buckets.for_kind(AttributeKind::Cluster);
        assert_eq!(cluster_sents, vec!["the flowers are loose".to_string()]);
    }

    #[test]
    fn spanish_flor_routes_to_flower() {
        let sentences = split_sentences("la flor es azul");
        let buckets = bucket_sentences(&sentences);
        assert_eq!(buckets.for_topic(Topic::Flower).len(), 1);
    }
}
