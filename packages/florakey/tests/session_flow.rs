//! Integration tests for full identification sessions.
//!
//! These drive the narrowing engine turn by turn against an in-memory
//! knowledge base and verify the session-level properties: monotonic
//! narrowing, at-most-once attribute consumption, and correct termination.

use florakey::{
    AttributeKind, Engine, MemoryKnowledgeBase, NumericBand, Outcome, SessionState,
    SessionStatus, SpeciesId, SpeciesRecord,
};

/// Five Wisconsin Rubiaceae species with enough facts to tell them apart.
fn sample_records() -> Vec<SpeciesRecord> {
    vec![
        SpeciesRecord::new("Cephalanthus occidentalis")
            .with_label(AttributeKind::Color, "white")
            .with_label(AttributeKind::Cluster, "ball")
            .with_label(AttributeKind::Position, "apical")
            .with_label(AttributeKind::FlowerShape, "bell")
            .with_label(AttributeKind::FlowerSymmetry, "radial")
            .with_label(AttributeKind::LeafArrangement, "opposite")
            .with_label(AttributeKind::LeafDivision, "simple")
            .with_label(AttributeKind::LeafShape, "widerMiddle")
            .with_label(AttributeKind::PetalNumber, "4")
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PetalLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(200.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(30.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(100.0)),
        SpeciesRecord::new("Galium boreale")
            .with_label(AttributeKind::Color, "white")
            .with_label(AttributeKind::Cluster, "loose")
            .with_label(AttributeKind::Position, "apical")
            .with_label(AttributeKind::FlowerShape, "rayed")
            .with_label(AttributeKind::FlowerSymmetry, "radial")
            .with_label(AttributeKind::LeafArrangement, "whorled")
            .with_label(AttributeKind::LeafDivision, "simple")
            .with_label(AttributeKind::LeafShape, "linear")
            .with_label(AttributeKind::PetalNumber, "4")
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PetalLength, NumericBand::at_most(3.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(100.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(200.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(30.0)),
        SpeciesRecord::new("Houstonia caerulea")
            .with_label(AttributeKind::Color, "blue")
            .with_label(AttributeKind::Cluster, "few")
            .with_label(AttributeKind::Position, "apical")
            .with_label(AttributeKind::FlowerShape, "rayed")
            .with_label(AttributeKind::FlowerSymmetry, "radial")
            .with_label(AttributeKind::LeafArrangement, "basal")
            .with_label(AttributeKind::LeafDivision, "simple")
            .with_label(AttributeKind::LeafShape, "widerTip")
            .with_label(AttributeKind::PetalNumber, "4")
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_least(0.0))
            .with_band(AttributeKind::PetalLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(30.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(50.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(70.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(100.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(200.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(1.0)),
        SpeciesRecord::new("Mitchella repens")
            .with_label(AttributeKind::Color, "white")
            .with_label(AttributeKind::Color, "pink")
            .with_label(AttributeKind::Cluster, "few")
            .with_label(AttributeKind::Position, "axillary")
            .with_label(AttributeKind::FlowerShape, "bell")
            .with_label(AttributeKind::FlowerSymmetry, "radial")
            .with_label(AttributeKind::LeafArrangement, "opposite")
            .with_label(AttributeKind::LeafDivision, "simple")
            .with_label(AttributeKind::LeafShape, "heart")
            .with_label(AttributeKind::PetalNumber, "4")
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PetalLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(30.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(50.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(70.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(100.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(200.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(1.0)),
        SpeciesRecord::new("Galium aparine")
            .with_label(AttributeKind::Color, "white")
            .with_label(AttributeKind::Cluster, "few")
            .with_label(AttributeKind::Position, "axillary")
            .with_label(AttributeKind::FlowerShape, "rayed")
            .with_label(AttributeKind::FlowerSymmetry, "radial")
            .with_label(AttributeKind::LeafArrangement, "whorled")
            .with_label(AttributeKind::LeafDivision, "simple")
            .with_label(AttributeKind::LeafMargin, "hairy")
            .with_label(AttributeKind::LeafShape, "linear")
            .with_label(AttributeKind::PetalNumber, "4")
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_most(10.0))
            .with_band(AttributeKind::LeafLength, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PetalLength, NumericBand::at_most(3.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(100.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_most(200.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(1.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(10.0))
            .with_band(AttributeKind::PlantSize, NumericBand::at_least(30.0)),
    ]
}

fn sample_engine() -> Engine<MemoryKnowledgeBase> {
    Engine::new(MemoryKnowledgeBase::from_records(sample_records()))
}

fn ids(names: &[&str]) -> Vec<SpeciesId> {
    names.iter().map(|n| SpeciesId::from(*n)).collect()
}

#[tokio::test]
async fn white_ball_cluster_resolves_to_buttonbush() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let report = engine
        .process_turn(&mut state, "The flowers are white and clustered like a ball.")
        .await
        .unwrap();

    assert_eq!(report.applied, vec![AttributeKind::Color, AttributeKind::Cluster]);
    assert_eq!(report.candidates, ids(&["Cephalanthus occidentalis"]));
    assert_eq!(report.status, SessionStatus::Resolved);
    assert_eq!(
        report.outcome(),
        Some(Outcome::Match("Cephalanthus occidentalis".into()))
    );
}

#[tokio::test]
async fn unrecognized_text_leaves_universe_untouched() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let report = engine
        .process_turn(&mut state, "It grows near the path by my house.")
        .await
        .unwrap();

    assert!(report.applied.is_empty());
    assert_eq!(report.candidates.len(), 5);
    assert_eq!(report.status, SessionStatus::Active);
    assert_eq!(report.next_question, Some(AttributeKind::Color));
}

#[tokio::test]
async fn leaf_length_composes_max_and_min_bands_by_intersection() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let report = engine
        .process_turn(&mut state, "The leaves are 3cm long.")
        .await
        .unwrap();

    assert_eq!(report.applied, vec![AttributeKind::LeafLength]);
    // Houstonia holds max-5 but only the min-0 fact; Cephalanthus holds
    // min-1 but not max-5. Neither survives the pair intersection.
    assert_eq!(
        report.candidates,
        ids(&["Galium boreale", "Mitchella repens", "Galium aparine"])
    );
}

#[tokio::test]
async fn plant_size_filters_by_union_of_satisfied_bands() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let report = engine
        .process_turn(&mut state, "It is about 8 cm tall.")
        .await
        .unwrap();

    assert_eq!(report.applied, vec![AttributeKind::PlantSize]);
    // Every species holds at least one satisfied band (all hold max-200 and
    // min-1), so the cumulative union keeps the whole universe.
    assert_eq!(report.candidates.len(), 5);
    assert!(state.is_consumed(AttributeKind::PlantSize));
}

#[tokio::test]
async fn candidates_shrink_monotonically_across_turns() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let first = engine
        .process_turn(&mut state, "The flowers are white.")
        .await
        .unwrap();
    assert_eq!(first.candidates.len(), 4);

    let second = engine
        .process_turn(&mut state, "The flowers sit at the bottom of the stem.")
        .await
        .unwrap();
    assert!(second.candidates.len() <= first.candidates.len());
    for species in &second.candidates {
        assert!(first.candidates.contains(species));
    }
    assert_eq!(
        second.candidates,
        ids(&["Mitchella repens", "Galium aparine"])
    );
}

#[tokio::test]
async fn consumed_attributes_are_never_reapplied() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let first = engine
        .process_turn(&mut state, "The flowers are white.")
        .await
        .unwrap();
    assert_eq!(first.applied, vec![AttributeKind::Color]);
    assert_eq!(first.candidates.len(), 4);

    // Contradictory color evidence later in the session is ignored.
    let second = engine
        .process_turn(&mut state, "The flowers are blue.")
        .await
        .unwrap();
    assert!(second.applied.is_empty());
    assert_eq!(second.candidates.len(), 4);
    assert_eq!(second.next_question, Some(AttributeKind::Cluster));
}

#[tokio::test]
async fn attribute_without_evidence_stays_available() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    engine
        .process_turn(&mut state, "I could not see the flowers clearly.")
        .await
        .unwrap();
    assert!(!state.is_consumed(AttributeKind::Color));

    let report = engine
        .process_turn(&mut state, "Now I see them, the flowers are blue.")
        .await
        .unwrap();
    assert_eq!(report.applied, vec![AttributeKind::Color]);
    assert_eq!(report.candidates, ids(&["Houstonia caerulea"]));
    assert_eq!(report.status, SessionStatus::Resolved);
}

#[tokio::test]
async fn inconsistent_evidence_resolves_to_no_match() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let report = engine
        .process_turn(&mut state, "The flowers are blue and clustered like a ball.")
        .await
        .unwrap();

    // Blue narrows to the bluet; the ball-cluster filter (buttonbush) is
    // non-empty, so it is applied and the intersection empties out.
    assert_eq!(report.applied, vec![AttributeKind::Color, AttributeKind::Cluster]);
    assert!(report.candidates.is_empty());
    assert_eq!(report.status, SessionStatus::Resolved);
    assert_eq!(report.outcome(), Some(Outcome::NoMatch));
}

#[tokio::test]
async fn malformed_quantity_is_absent_evidence_not_failure() {
    let engine = sample_engine();
    let mut state = SessionState::new();

    let report = engine
        .process_turn(&mut state, "The leaves are 5x long.")
        .await
        .unwrap();

    assert!(report.applied.is_empty());
    assert!(!state.is_consumed(AttributeKind::LeafLength));
    assert_eq!(report.candidates.len(), 5);
}

fn twin(name: &str) -> SpeciesRecord {
    SpeciesRecord::new(name)
        .with_label(AttributeKind::Color, "white")
        .with_label(AttributeKind::Cluster, "ball")
        .with_label(AttributeKind::Position, "apical")
        .with_label(AttributeKind::FlowerShape, "bell")
        .with_label(AttributeKind::FlowerSymmetry, "radial")
        .with_label(AttributeKind::LeafArrangement, "whorled")
        .with_label(AttributeKind::LeafDivision, "simple")
        .with_label(AttributeKind::LeafMargin, "hairy")
        .with_label(AttributeKind::LeafShape, "linear")
        .with_label(AttributeKind::PetalNumber, "4")
        .with_band(AttributeKind::LeafLength, NumericBand::at_most(5.0))
        .with_band(AttributeKind::LeafLength, NumericBand::at_least(1.0))
        .with_band(AttributeKind::PetalLength, NumericBand::at_most(10.0))
        .with_band(AttributeKind::PlantSize, NumericBand::at_most(30.0))
        .with_band(AttributeKind::PlantSize, NumericBand::at_least(1.0))
        .with_band(AttributeKind::PlantSize, NumericBand::at_least(10.0))
}

#[tokio::test]
async fn exhausting_every_question_on_twins_stays_active() {
    let engine = Engine::new(MemoryKnowledgeBase::from_records(vec![
        twin("Twin A"),
        twin("Twin B"),
    ]));
    let mut state = SessionState::new();

    let report = engine
        .process_turn(
            &mut state,
            "The flowers are white, radial, bell shaped, clustered like a ball, and sit at the tip. \
             The leaves are linear, whorled, simple, fuzzy, and 4cm long. \
             The petals are 5mm long. There are 4 petals on each one. \
             It stands about 20 cm tall.",
        )
        .await
        .unwrap();

    // Every attribute produced evidence, yet the twins are inseparable.
    assert_eq!(report.applied.len(), 13);
    assert_eq!(report.candidates.len(), 2);
    assert_eq!(report.status, SessionStatus::Active);
    assert_eq!(report.next_question, None);
    assert!(report.questions_exhausted());

    // A further turn has nothing left to apply.
    let after = engine
        .process_turn(&mut state, "The flowers are pink.")
        .await
        .unwrap();
    assert!(after.applied.is_empty());
    assert!(after.questions_exhausted());
}

#[tokio::test]
async fn sessions_are_independent() {
    let engine = sample_engine();

    let mut first = SessionState::new();
    let mut second = SessionState::new();

    engine
        .process_turn(&mut first, "The flowers are blue.")
        .await
        .unwrap();

    let report = engine
        .process_turn(&mut second, "The flowers are white.")
        .await
        .unwrap();

    // Consumption in one session never leaks into another.
    assert!(first.is_consumed(AttributeKind::Color));
    assert_eq!(report.candidates.len(), 4);
    assert_eq!(first.candidates().unwrap().len(), 1);
}
