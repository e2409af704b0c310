use log::info;
use std::collections::HashSet;

use crate::demo::DEMO_SPEC;
use crate::implementations::extractor::{ candidate_lines, extract_candidates, MIN_SENTENCE_LEN };
use crate::implementations::linguistics::{ LexiconLinguistics, NullLinguistics };
use crate::models::common::{ Kind, Priority, ProofStatus };
use crate::tests::setup;

#[test]
fn test_demo_extraction_without_linguistics() {
    setup();

    let requirements = extract_candidates(DEMO_SPEC, &NullLinguistics);
    for r in &requirements {
        info!("{} [{}] {}", r.kind, r.priority, r.text);
    }

    // the fallback splitter also cuts on the decimal point in 99.9
    assert_eq!(requirements.len(), 8);
    assert_eq!(requirements[0].text, "Requirement: The system shall never allow conflicting greens");

    let texts: HashSet<_> = requirements.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts.len(), requirements.len());
    assert!(requirements.iter().all(|r| r.text.chars().count() > MIN_SENTENCE_LEN));
    assert!(requirements.iter().all(|r| r.suggestions.len() <= 4));
    assert!(requirements.iter().all(|r| r.status == ProofStatus::Unproven && !r.selected));
}

#[test]
fn test_demo_extraction_with_lexicon() {
    setup();

    let requirements = extract_candidates(DEMO_SPEC, &LexiconLinguistics);
    let texts: Vec<_> = requirements.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Requirement: The system shall never allow conflicting greens.",
            "NFR: Average waiting time should be under 40s at peak.",
            "NFR: Availability >= 99.9% during cruise.",
            "NFR: Mode change latency should be under 100 ms.",
            "Spec == Init /\\ [][Next]_<<light, queue>>",
            "Invariant == TypeOK /\\ NoConflict",
            "THEOREM Spec => []Invariant",
        ]
    );

    assert_eq!(requirements[0].kind, Kind::Functional);
    assert_eq!(requirements[0].priority, Priority::High);
    assert_eq!(requirements[2].kind, Kind::NonFunctional);
    assert_eq!(requirements[2].rationale, "Mentions reliability cues");
    assert_eq!(requirements[3].rationale, "Mentions performance cues");
    assert_eq!(requirements[6].kind, Kind::Functional);

    let ids: HashSet<_> = requirements.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), requirements.len());
}

#[test]
fn test_annotation_and_flagged_line_collapse() {
    setup();

    let source = "(* Req: Doors shall lock. *)\nReq: Doors shall lock.";
    let requirements = extract_candidates(source, &NullLinguistics);
    assert_eq!(requirements.len(), 1);
    assert_eq!(requirements[0].text, "Req: Doors shall lock");
}

#[test]
fn test_short_and_empty_input() {
    assert!(extract_candidates("", &LexiconLinguistics).is_empty());
    assert!(extract_candidates("(* Go. *)", &NullLinguistics).is_empty());
    assert!(extract_candidates("VARIABLES x\nInit == x = 0", &LexiconLinguistics).is_empty());
}

#[test]
fn test_candidate_lines_order_and_star_rows() {
    let source = "(* first\nnote *)\n****\n* Invariant holds on every step\nTHEOREM Spec => []Safe";
    let lines = candidate_lines(source);
    assert_eq!(
        lines,
        vec!["first note", "* Invariant holds on every step", "THEOREM Spec => []Safe"]
    );
}
