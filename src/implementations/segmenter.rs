use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::traits::LinguisticTool;

static BLOCK_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\(\*.*?\*\)").unwrap());
static FALLBACK_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?\n]+").unwrap());

/// Split a text block into sentences.
///
/// The linguistic tool's answer is used verbatim when it produces anything;
/// otherwise (empty result or error) block comments are stripped and the text
/// is cut on `.`, `!`, `?` and newline runs. Never fails.
pub fn split_sentences(text: &str, tool: &dyn LinguisticTool) -> Vec<String> {
    match tool.segment(text) {
        Ok(sentences) if !sentences.is_empty() => return sentences,
        Ok(_) => {}
        Err(e) => debug!("Sentence segmentation unavailable, using fallback: {}", e),
    }
    fallback_split(text)
}

/// Deterministic splitter used when no linguistic tool answers
pub fn fallback_split(text: &str) -> Vec<String> {
    let stripped = BLOCK_COMMENT_RE.replace_all(text, " ");
    FALLBACK_SPLIT_RE
        .split(&stripped)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
