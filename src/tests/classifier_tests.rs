use log::debug;

use crate::implementations::classifier::{
    classify_kind,
    detect_cluster,
    score_priority,
    RATIONALE_ACTION_VERBS,
    RATIONALE_QUALITY,
    RATIONALE_SPEC_CUES,
};
use crate::implementations::linguistics::{ LexiconLinguistics, NullLinguistics };
use crate::models::common::{ Kind, NfrCluster, Priority };
use crate::tests::{ setup, BrokenLinguistics };

#[test]
fn test_quality_cluster_without_functional_cue() {
    setup();

    let c = classify_kind("Mode change latency should be under 100 ms.", &NullLinguistics);
    assert_eq!(c.kind, Kind::NonFunctional);
    assert_eq!(c.rationale, "Mentions performance cues");

    let c = classify_kind("Availability >= 99.9% during cruise.", &NullLinguistics);
    assert_eq!(c.kind, Kind::NonFunctional);
    assert_eq!(c.rationale, "Mentions reliability cues");
}

#[test]
fn test_functional_cue_wins_over_cluster() {
    setup();

    let c = classify_kind("The system shall respond within 100 ms", &NullLinguistics);
    debug!("Classification: {:?}", c);
    assert_eq!(c.kind, Kind::Functional);
    assert_eq!(c.rationale, RATIONALE_SPEC_CUES);
}

#[test]
fn test_action_verbs_need_a_linguistic_tool() {
    setup();

    let sentence = "The door opens on request";

    let with_lexicon = classify_kind(sentence, &LexiconLinguistics);
    assert_eq!(with_lexicon.kind, Kind::Functional);
    assert_eq!(with_lexicon.rationale, RATIONALE_ACTION_VERBS);

    let without = classify_kind(sentence, &NullLinguistics);
    assert_eq!(without.kind, Kind::NonFunctional);
    assert_eq!(without.rationale, RATIONALE_QUALITY);

    // an erroring tool degrades the same way as an absent one
    assert_eq!(classify_kind(sentence, &BrokenLinguistics), without);
}

#[test]
fn test_classification_is_deterministic() {
    setup();

    for sentence in [
        "The operator could log errors",
        "Spec == Init /\\ [][Next]_<<light, queue>>",
        "Looks nice",
    ] {
        assert_eq!(
            classify_kind(sentence, &LexiconLinguistics),
            classify_kind(sentence, &LexiconLinguistics)
        );
        assert_eq!(score_priority(sentence), score_priority(sentence));
    }
}

#[test]
fn test_cluster_match_order() {
    assert_eq!(detect_cluster("latency and crash"), Some(NfrCluster::Performance));
    assert_eq!(detect_cluster("recover after a crash"), Some(NfrCluster::Reliability));
    assert_eq!(detect_cluster("The operator could log errors"), Some(NfrCluster::Usability));
    assert_eq!(detect_cluster("Looks nice"), None);
}

#[test]
fn test_priority_rules() {
    setup();

    assert_eq!(score_priority("The controller must reject invalid tokens"), Priority::High);
    assert_eq!(score_priority("Avoid deadlock"), Priority::High);
    assert_eq!(score_priority("Requests should be retried"), Priority::Medium);
    assert_eq!(score_priority("Users may customize colors"), Priority::Low);
    assert_eq!(score_priority("The door opens on request"), Priority::Medium);

    // the first rule wins even when a later rule also matches
    assert_eq!(score_priority("It must be nice"), Priority::High);
    assert_eq!(score_priority("It should be optional"), Priority::Medium);
}

#[test]
fn test_must_is_always_high() {
    for sentence in ["must", "Operators MUST log in", "The UI may not, but it must"] {
        assert_eq!(score_priority(sentence), Priority::High, "{}", sentence);
    }
}

#[test]
fn test_usability_with_low_priority() {
    let c = classify_kind("The operator could log errors", &NullLinguistics);
    assert_eq!(c.kind, Kind::NonFunctional);
    assert_eq!(c.rationale, "Mentions usability cues");
    assert_eq!(score_priority("The operator could log errors"), Priority::Low);
}
