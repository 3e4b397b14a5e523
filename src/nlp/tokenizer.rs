//! Segmentation and word tokenization
//!
//! Paragraphs are separated by line breaks; sentences follow UAX #29
//! sentence boundaries. Words are extracted with a regular expression that
//! keeps numbers with separators, hyphenated words and the `?`/`!` marks.

use crate::errors::Result;
use crate::pipeline::traits::{Segmenter, WordTokenizer};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"[\r\n]+").expect("valid regex");
    static ref WORD: Regex =
        Regex::new(r"[0-9]+(?:[.,:][0-9]+)*|\w+(?:-\w+)*|[!?]").expect("valid regex");
}

/// A Unicode-aware segmenter following UAX #29
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl UnicodeSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split one paragraph into trimmed, non-empty sentences
    pub fn sentences(&self, paragraph: &str) -> Vec<String> {
        paragraph
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Vec<String>>> {
        Ok(PARAGRAPH_BREAK
            .split(text)
            .map(|paragraph| self.sentences(paragraph))
            .filter(|sentences| !sentences.is_empty())
            .collect())
    }
}

/// Regex-based word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTokenizer;

impl RegexTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl WordTokenizer for RegexTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        WORD
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
