use once_cell::sync::Lazy;
use regex::Regex;

use crate::implementations::classifier::detect_cluster;
use crate::models::common::Kind;
use crate::traits::LinguisticTool;

pub const MAX_SUGGESTIONS: usize = 4;

static NORMATIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(shall|must|always)\b").unwrap());
static TEMPORAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\balways\b|\beventually\b|\buntil\b|\[\]|<>)").unwrap()
});
static SPEC_ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(Invariant|TypeOK|THEOREM|Spec)\b").unwrap()
});
static BOUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(under|within|<=|<|>=|>|\bms\b|\bs\b)").unwrap()
});

/// Deterministic improvement hints for one sentence, at most four, in generation order
pub fn suggest_improvements(sentence: &str, kind: Kind, tool: &dyn LinguisticTool) -> Vec<String> {
    let mut out = Vec::new();

    match kind {
        Kind::Functional => {
            if !NORMATIVE_RE.is_match(sentence) {
                out.push("Use a normative modal like 'shall' or 'must'.".to_string());
            }
            if !TEMPORAL_RE.is_match(sentence) {
                out.push("State the temporal mode: 'always', 'eventually', or 'until'.".to_string());
            }
            if !SPEC_ANCHOR_RE.is_match(sentence) {
                out.push(
                    "Tie it to a named invariant and a theorem (e.g., Spec => []Invariant)."
                        .to_string(),
                );
            }
            let verbs = tool.verbs(sentence).unwrap_or_default();
            let nouns = tool.nouns(sentence).unwrap_or_default();
            if let Some(verb) = verbs.first() {
                if !nouns.is_empty() {
                    let object = nouns.iter().take(2).cloned().collect::<Vec<_>>().join(" ");
                    out.push(format!("Rewrite: The system shall {} {}.", verb, object));
                }
            }
        }
        Kind::NonFunctional => {
            let label = detect_cluster(sentence)
                .map(|c| c.name().to_lowercase())
                .unwrap_or_else(|| "quality".to_string());
            if !BOUND_RE.is_match(sentence) {
                out.push(
                    "Quantify it with a bound (e.g., under 40 ms, >= 99.9% uptime).".to_string(),
                );
            }
            out.push(format!(
                "Consider a monitor variable and an invariant recording {} compliance.",
                label
            ));
            out.push("Add testable acceptance criteria.".to_string());
        }
    }

    out.truncate(MAX_SUGGESTIONS);
    out
}
