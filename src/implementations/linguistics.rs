//! Linguistic capabilities: a null object and a small rule-based lexicon tool.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ReqmineResult;
use crate::traits::LinguisticTool;

/// Stands in for an absent linguistic tool; always reports nothing found
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLinguistics;

impl LinguisticTool for NullLinguistics {
    fn segment(&self, _text: &str) -> ReqmineResult<Vec<String>> {
        Ok(Vec::new())
    }

    fn verbs(&self, _text: &str) -> ReqmineResult<Vec<String>> {
        Ok(Vec::new())
    }

    fn nouns(&self, _text: &str) -> ReqmineResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Base forms of verbs that commonly appear in requirement statements
const VERB_LEXICON: &[&str] = &[
    "accept", "allow", "block", "change", "check", "close", "compute", "detect", "deliver",
    "disable", "display", "emit", "enable", "encrypt", "enter", "grant", "handle", "hold",
    "keep", "limit", "log", "maintain", "notify", "open", "prevent", "process", "produce",
    "receive", "record", "recover", "reject", "release", "remain", "report", "reset", "respond",
    "restart", "retry", "return", "schedule", "send", "signal", "start", "stop", "store",
    "switch", "track", "turn", "update", "validate", "verify",
];

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "but", "not", "any", "all", "each", "every", "with", "without", "into",
    "onto", "from", "than", "that", "this", "these", "those", "when", "then", "there", "their",
    "its", "are", "was", "were", "been", "being", "has", "have", "had", "does", "did", "under",
    "within", "over", "least", "most", "more", "less", "during", "after", "before", "while",
    "until", "never", "always", "eventually", "also", "only", "both", "either", "neither", "per",
    "via", "between", "against", "should", "shall", "must", "will", "would", "could", "can",
    "may", "might", "need", "needs", "requirement", "req", "nfr", "assume",
];

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z'-]*").unwrap());

// Terminal punctuation only ends a sentence when whitespace or the end follows,
// so decimals like 99.9 stay intact.
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());
static COMMENT_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\*|\*\)").unwrap());

/// Deterministic lexicon-driven implementation of [`LinguisticTool`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconLinguistics;

impl LexiconLinguistics {
    fn verb_base(word: &str) -> Option<&'static str> {
        let lower = word.to_lowercase();
        VERB_LEXICON.iter().copied().find(|base| {
            if lower == *base {
                return true;
            }
            ["s", "es", "ed", "d", "ing"].iter().any(|suffix| {
                lower.strip_suffix(suffix).map_or(false, |stem| {
                    stem == *base
                        // doubled final consonant (e.g. "logged") or dropped final "e" (e.g. "storing")
                        || (stem.len() == base.len() + 1 && stem.starts_with(base))
                        || (base.ends_with('e') && stem == &base[..base.len() - 1])
                })
            })
        })
    }

    fn words(text: &str) -> impl Iterator<Item = &str> {
        WORD_RE.find_iter(text).map(|m| m.as_str())
    }
}

impl LinguisticTool for LexiconLinguistics {
    fn segment(&self, text: &str) -> ReqmineResult<Vec<String>> {
        // comment delimiters are markup, not prose
        let text = COMMENT_MARKER_RE.replace_all(text, " ");
        let text = text.as_ref();
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in SENTENCE_END_RE.find_iter(text) {
            let piece = text[start..m.end()].trim();
            if !piece.is_empty() {
                sentences.push(piece.to_string());
            }
            start = m.end();
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        Ok(sentences)
    }

    fn verbs(&self, text: &str) -> ReqmineResult<Vec<String>> {
        Ok(Self::words(text)
            .filter_map(Self::verb_base)
            .map(str::to_string)
            .collect())
    }

    fn nouns(&self, text: &str) -> ReqmineResult<Vec<String>> {
        Ok(Self::words(text)
            .filter(|w| {
                let lower = w.to_lowercase();
                lower.len() >= 3
                    && !STOPWORDS.contains(&lower.as_str())
                    && !lower.ends_with("ly")
                    && !lower.ends_with("ing")
                    && Self::verb_base(w).is_none()
            })
            .map(str::to_string)
            .collect())
    }
}
