use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::implementations::classifier::{ classify_kind, score_priority };
use crate::implementations::segmenter::split_sentences;
use crate::implementations::suggestions::suggest_improvements;
use crate::models::requirement::Requirement;
use crate::traits::LinguisticTool;

/// Sentences this short or shorter are discarded
pub const MIN_SENTENCE_LEN: usize = 6;

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\*([\s\S]*?)\*\)").unwrap());
static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static STARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*+$").unwrap());
static FLAGGED_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Requirement:|Req:|Assume|THEOREM|Invariant|invariant|\[\]|<>)").unwrap()
});

/// Annotation comments and flagged lines, in that order, before segmentation
pub fn candidate_lines(source: &str) -> Vec<String> {
    let mut buckets: Vec<String> = COMMENT_RE
        .captures_iter(source)
        .map(|caps| NEWLINES_RE.replace_all(&caps[1], " ").trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    for line in source.lines() {
        let trimmed = line.trim();
        if STARS_RE.is_match(trimmed) {
            continue;
        }
        if FLAGGED_LINE_RE.is_match(trimmed) {
            buckets.push(trimmed.to_string());
        }
    }
    buckets
}

/// Segmented, trimmed, deduplicated sentences longer than [`MIN_SENTENCE_LEN`]
pub fn candidate_sentences(source: &str, tool: &dyn LinguisticTool) -> Vec<String> {
    let mut seen = HashSet::new();
    candidate_lines(source)
        .iter()
        .flat_map(|line| split_sentences(line, tool))
        .map(|s| s.trim().to_string())
        .filter(|s| seen.insert(s.clone()))
        .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
        .collect()
}

/// Build a fully classified and annotated record for one sentence
pub fn build_requirement(sentence: String, tool: &dyn LinguisticTool) -> Requirement {
    let classification = classify_kind(&sentence, tool);
    let priority = score_priority(&sentence);
    let suggestions = suggest_improvements(&sentence, classification.kind, tool);
    Requirement::new(
        sentence,
        classification.kind,
        priority,
        classification.rationale,
        suggestions,
    )
}

/// Extract candidate requirements from annotated specification source
pub fn extract_candidates(source: &str, tool: &dyn LinguisticTool) -> Vec<Requirement> {
    let sentences = candidate_sentences(source, tool);
    debug!("Extracted {} candidate sentence(s)", sentences.len());
    sentences
        .into_iter()
        .map(|s| build_requirement(s, tool))
        .collect()
}
