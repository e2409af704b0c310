//! Text-pattern proof heuristics.
//!
//! Neither form parses TLA+ or checks semantics. A sentence that merely names
//! an invariant and a theorem in prose is still reported as Proved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::common::ProofStatus;
use crate::models::requirement::Requirement;

static NEVER_ALLOW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)never\s+allow").unwrap());
static NEVER_ALLOW_PRED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)never\s+allow\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});
static NEXT_BODY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Next\s*==[\s\S]+").unwrap());
static NEXT_PARAGRAPH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Next\s*==([\s\S]*?)\n\n").unwrap());
static DEFINITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([A-Za-z_][A-Za-z0-9_]*)\s*==").unwrap()
});
static THEOREM_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"THEOREM[^\n]*Spec\s*=>\s*\[\]\s*([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

/// Authoritative per-invariant decision used by the remote evaluator.
///
/// Proved when a `THEOREM ... Spec => []<name>` appears (possibly across lines),
/// Failed when the text says "never allow" and has a non-empty `Next ==` body,
/// Unclear otherwise.
pub fn decide_status(name: &str, tla: &str) -> ProofStatus {
    let theorem = format!(r"THEOREM[\s\S]*?Spec\s*=>\s*\[\]\s*{}\b", regex::escape(name));
    if let Ok(re) = Regex::new(&theorem) {
        if re.is_match(tla) {
            return ProofStatus::Proved;
        }
    }

    if NEVER_ALLOW_RE.is_match(tla) && NEXT_BODY_RE.is_match(tla) {
        return ProofStatus::Failed;
    }

    ProofStatus::Unclear
}

/// Names concluded by single-line `THEOREM ... Spec => []Name` statements
pub fn theorem_invariants(tla: &str) -> Vec<String> {
    THEOREM_LINE_RE
        .captures_iter(tla)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Identifiers defined with `==` at the start of a line
pub fn defined_names(tla: &str) -> Vec<String> {
    DEFINITION_RE
        .captures_iter(tla)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Concatenated `Next == ...` bodies, each ending at the next blank line
pub fn next_bodies(tla: &str) -> String {
    NEXT_PARAGRAPH_RE
        .find_iter(tla)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Names extracted once from a specification for the local heuristic
#[derive(Debug, Clone, Default)]
pub struct SpecIndex {
    pub invariants: Vec<String>,
    pub theorems: Vec<String>,
    pub next_bodies: String,
}

impl SpecIndex {
    pub fn build(tla: &str) -> Self {
        Self {
            invariants: defined_names(tla),
            theorems: theorem_invariants(tla),
            next_bodies: next_bodies(tla),
        }
    }

    /// Apply the local heuristic to one record in place. Returns true if it changed.
    pub fn apply(&self, requirement: &mut Requirement) -> bool {
        let used = self.theorems.iter().find(|nm| requirement.text.contains(nm.as_str()));
        let defined = self.invariants.iter().find(|nm| requirement.text.contains(nm.as_str()));

        if let (Some(used), Some(defined)) = (used, defined) {
            requirement.status = ProofStatus::Proved;
            requirement.evidence = Some(format!(
                "Theorem asserts Spec => []{} and {} is defined.",
                used, defined
            ));
            return true;
        }

        if let Some(caps) = NEVER_ALLOW_PRED_RE.captures(&requirement.text) {
            let predicate = &caps[1];
            if self.next_bodies.contains(predicate) {
                requirement.status = ProofStatus::Failed;
                requirement.evidence = Some(format!(
                    "Next mentions '{}', contradicting 'never allow'.",
                    predicate
                ));
                return true;
            }
        }

        false
    }
}

/// Local fallback: cross-reference requirement text against the specification's
/// theorems, definitions and `Next` bodies. Records that match nothing keep
/// their current status.
pub fn mock_prove(requirements: &mut [Requirement], tla: &str) -> usize {
    let index = SpecIndex::build(tla);
    requirements
        .iter_mut()
        .map(|r| index.apply(r))
        .filter(|changed| *changed)
        .count()
}
