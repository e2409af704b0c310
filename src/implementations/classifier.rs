//! Keyword classification of a single sentence into kind, priority and quality cluster.

use crate::models::common::{ Kind, NfrCluster, Priority };
use crate::traits::LinguisticTool;

/// Cues that mark a sentence as functional (case-insensitive substring match)
pub const FN_KEYWORDS: &[&str] = &[
    "shall", "must", "will", "ensure", "if", "when", "then", "always", "eventually", "invariant",
    "liveness", "safety", "init", "next", "spec", "theorem",
];

/// Priority rules, first match wins. Order is significant.
pub const PRIORITY_RULES: &[(Priority, &[&str])] = &[
    (Priority::High, &["must", "shall", "safety", "hazard", "deadlock", "always"]),
    (Priority::Medium, &["should", "ensure", "reliab", "security", "eventually"]),
    (Priority::Low, &["may", "could", "nice", "optional", "usability"]),
];

pub const RATIONALE_SPEC_CUES: &str =
    "Uses spec cues (Init/Next/Spec/invariant/temporal) or normative verbs";
pub const RATIONALE_ACTION_VERBS: &str = "Contains action verbs";
pub const RATIONALE_QUALITY: &str = "No spec cues; reads like a quality constraint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: Kind,
    pub rationale: String,
}

/// First quality cluster whose keyword occurs in the sentence
pub fn detect_cluster(sentence: &str) -> Option<NfrCluster> {
    let low = sentence.to_lowercase();
    NfrCluster::ALL
        .iter()
        .copied()
        .find(|cluster| cluster.keywords().iter().any(|w| low.contains(w)))
}

pub fn has_functional_cue(sentence: &str) -> bool {
    let low = sentence.to_lowercase();
    FN_KEYWORDS.iter().any(|k| low.contains(k))
}

/// Decide Functional vs Non-functional and explain why
pub fn classify_kind(sentence: &str, tool: &dyn LinguisticTool) -> Classification {
    let has_fn = has_functional_cue(sentence);

    if let Some(cluster) = detect_cluster(sentence) {
        if !has_fn {
            return Classification {
                kind: Kind::NonFunctional,
                rationale: format!("Mentions {} cues", cluster.name().to_lowercase()),
            };
        }
    }

    if has_fn {
        return Classification {
            kind: Kind::Functional,
            rationale: RATIONALE_SPEC_CUES.to_string(),
        };
    }

    if let Ok(verbs) = tool.verbs(sentence) {
        if !verbs.is_empty() {
            return Classification {
                kind: Kind::Functional,
                rationale: RATIONALE_ACTION_VERBS.to_string(),
            };
        }
    }

    Classification {
        kind: Kind::NonFunctional,
        rationale: RATIONALE_QUALITY.to_string(),
    }
}

pub fn score_priority(sentence: &str) -> Priority {
    let low = sentence.to_lowercase();
    for (level, cues) in PRIORITY_RULES {
        if cues.iter().any(|c| low.contains(c)) {
            return *level;
        }
    }
    if low.contains("deadlock") || low.contains("hazard") {
        return Priority::High;
    }
    Priority::Medium
}
