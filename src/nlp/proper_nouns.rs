//! Naive proper-noun detection
//!
//! A token counts as a proper noun when it is capitalized (only the part
//! before the first hyphen is checked) and is not the first token of its
//! sentence.

use crate::document::StemmedDocument;
use rustc_hash::FxHashSet;

/// Collect the stems of proper-noun candidates in a stemmed document
pub fn detect_proper_nouns(document: &StemmedDocument) -> FxHashSet<String> {
    document
        .sentences()
        .flat_map(|sentence| sentence.tokens.iter().skip(1))
        .filter(|token| is_title_case(head_of_hyphenated(&token.surface)))
        .map(|token| token.stem.clone())
        .collect()
}

fn head_of_hyphenated(word: &str) -> &str {
    word.split('-').next().unwrap_or(word)
}

/// Title case: at least one cased letter, every cased run starts uppercase
/// and continues lowercase.
pub fn is_title_case(word: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;
    for c in word.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }
    seen_cased
}
