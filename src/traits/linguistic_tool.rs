use crate::errors::ReqmineResult;

/// Optional natural-language capability used for segmentation and verb/noun detection.
///
/// Every caller treats an `Err` (or an empty result) as "feature not available"
/// and degrades to a keyword-only fallback, so implementations are free to fail.
pub trait LinguisticTool: Send + Sync {
    /// Split a block of text into sentences
    fn segment(&self, text: &str) -> ReqmineResult<Vec<String>>;

    /// Verbs found in the text, in infinitive form, in order of appearance
    fn verbs(&self, text: &str) -> ReqmineResult<Vec<String>>;

    /// Nouns found in the text, in order of appearance
    fn nouns(&self, text: &str) -> ReqmineResult<Vec<String>>;
}
