//! Composite weight refinement
//!
//! Three layers applied to the symmetric score, in order:
//! proper nouns, digits, then length normalization.

use crate::types::SentenceTermFrequency;
use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::FxHashSet;

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+([.,:][0-9]+)*$").expect("valid regex");
}

/// Sentences with more distinct stems than this are length-normalized
pub const LENGTH_NORMALIZATION_THRESHOLD: usize = 5;

/// `1 + log2(n)` for `n > 0`, otherwise 1
#[inline]
pub fn log_boost(n: usize) -> f64 {
    if n > 0 {
        1.0 + (n as f64).log2()
    } else {
        1.0
    }
}

/// Whether a stem is a number such as `1941`, `3.14`, `1,000` or `4:00`
pub fn is_numeric(stem: &str) -> bool {
    NUMBER.is_match(stem)
}

/// Number of known proper-noun stems present in the sentence
pub fn proper_noun_count(sentence: &SentenceTermFrequency, proper_nouns: &FxHashSet<String>) -> usize {
    proper_nouns.iter().filter(|p| sentence.contains(p)).count()
}

/// Sum of occurrence counts of numeric stems in the sentence
pub fn digit_count(sentence: &SentenceTermFrequency) -> usize {
    sentence
        .iter()
        .filter(|(stem, _)| is_numeric(stem))
        .map(|(_, count)| count)
        .sum()
}

/// Refines symmetric scores with proper-noun, digit and length layers
#[derive(Debug, Clone)]
pub struct CompositeRefiner<'a> {
    proper_nouns: &'a FxHashSet<String>,
    average_sentence_length: f64,
}

impl<'a> CompositeRefiner<'a> {
    /// `average_sentence_length` is total document stems / total sentences
    pub fn new(proper_nouns: &'a FxHashSet<String>, average_sentence_length: f64) -> Self {
        Self {
            proper_nouns,
            average_sentence_length,
        }
    }

    /// Refine one score
    pub fn refine(&self, sentence: &SentenceTermFrequency, score: f64) -> f64 {
        let score = score * log_boost(proper_noun_count(sentence, self.proper_nouns));
        let score = score * log_boost(digit_count(sentence));
        self.normalize_length(sentence.distinct_stems(), score)
    }

    /// `asl × score / n` when `n` exceeds the threshold
    pub fn normalize_length(&self, distinct_stems: usize, score: f64) -> f64 {
        if distinct_stems > LENGTH_NORMALIZATION_THRESHOLD {
            self.average_sentence_length * score / distinct_stems as f64
        } else {
            score
        }
    }

    /// Refine scores aligned with `sentences`
    pub fn refine_all(&self, sentences: &[SentenceTermFrequency], scores: &[f64]) -> Vec<f64> {
        debug_assert_eq!(sentences.len(), scores.len());
        sentences
            .iter()
            .zip(scores)
            .map(|(sentence, &score)| self.refine(sentence, score))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(pairs: &[(&str, usize)]) -> SentenceTermFrequency {
        SentenceTermFrequency::from_counts(pairs.iter().map(|(s, c)| (*s, *c)))
    }

    fn proper(stems: &[&str]) -> FxHashSet<String> {
        stems.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_numeric_pattern() {
        assert!(is_numeric("1941"));
        assert!(is_numeric("3.14"));
        assert!(is_numeric("1,000,000"));
        assert!(is_numeric("12:30"));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("3."));
        assert!(!is_numeric("год"));
    }

    #[test]
    fn test_log_boost() {
        assert_eq!(log_boost(0), 1.0);
        assert_eq!(log_boost(1), 1.0);
        assert_eq!(log_boost(4), 3.0);
    }

    #[test]
    fn test_proper_and_digit_layers() {
        let pn = proper(&["москв", "жуков", "берлин"]);
        let refiner = CompositeRefiner::new(&pn, 1.0);
        let sentence = tf(&[("москв", 1), ("жуков", 2), ("1941", 2), ("22.06", 2)]);

        // p = 2 → ×2, d = 4 → ×3, 4 distinct stems → no length layer
        assert!((refiner.refine(&sentence, 10.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_normalization_example() {
        let pn = FxHashSet::default();
        let refiner = CompositeRefiner::new(&pn, 10.0);
        let normalized = refiner.normalize_length(7, 50.0);
        assert!((normalized - 500.0 / 7.0).abs() < 1e-9);
        assert!((normalized - 71.43).abs() < 0.01);
    }

    #[test]
    fn test_short_sentences_untouched() {
        let pn = FxHashSet::default();
        let refiner = CompositeRefiner::new(&pn, 10.0);
        assert_eq!(refiner.normalize_length(5, 50.0), 50.0);

        let sentence = tf(&[("a", 1), ("b", 1)]);
        assert_eq!(refiner.refine(&sentence, 7.5), 7.5);
    }

    #[test]
    fn test_refine_all_aligned() {
        let pn = FxHashSet::default();
        let refiner = CompositeRefiner::new(&pn, 2.0);
        let sentences = vec![
            tf(&[("a", 1)]),
            tf(&[("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1), ("f", 1)]),
        ];
        let refined = refiner.refine_all(&sentences, &[4.0, 6.0]);
        assert_eq!(refined[0], 4.0);
        assert!((refined[1] - 2.0).abs() < 1e-12);
    }
}
