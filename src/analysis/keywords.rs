//! Document-order keyword extraction

use unicode_segmentation::UnicodeSegmentation;

const MAX_KEYWORDS: usize = 20;

/// Stop words never emitted as keywords.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Extracts up to the first 20 lower-cased tokens from the text,
/// preserving document order (not frequency order). Tokens of length
/// three or less and stop words are dropped.
#[derive(Debug, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn keywords(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| word.to_lowercase())
            .filter(|word| word.len() > 3 && !STOP_WORDS.contains(&word.as_str()))
            .take(MAX_KEYWORDS)
            .collect()
    }
}
