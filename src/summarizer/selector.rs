//! Percentage-based sentence selection
//!
//! Ranks eligible sentences by score, keeps the top share given by the
//! compression percentage, and returns them in document order.

use crate::types::ScoredSentence;

/// Number of sentences kept: `floor(n × percentage / 100 + 0.5)`
pub fn compression_count(eligible: usize, percentage: u32) -> usize {
    (eligible as f64 * percentage as f64 / 100.0 + 0.5).floor() as usize
}

/// Top-percentage selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    percentage: u32,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new(10)
    }
}

impl SentenceSelector {
    /// Create a selector keeping `percentage` percent (clamped to 0..=100)
    pub fn new(percentage: u32) -> Self {
        Self {
            percentage: percentage.min(100),
        }
    }

    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    /// Sentences sorted by score descending. Equal scores keep their
    /// incoming order.
    pub fn rank(&self, mut sentences: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
        sentences.sort_by(|a, b| b.score.total_cmp(&a.score));
        sentences
    }

    /// Select the top share and restore document order
    pub fn select(&self, sentences: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
        let count = compression_count(sentences.len(), self.percentage);
        let mut selected = self.rank(sentences);
        selected.truncate(count);
        selected.sort_by_key(|s| s.index);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(scores: &[f64]) -> Vec<ScoredSentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| ScoredSentence::new(format!("s{}", i), *s, i))
            .collect()
    }

    #[test]
    fn test_compression_count_rounds_half_up() {
        assert_eq!(compression_count(10, 60), 6);
        assert_eq!(compression_count(5, 10), 1); // 0.5 → 1
        assert_eq!(compression_count(4, 10), 0); // 0.4 → 0
        assert_eq!(compression_count(3, 50), 2); // 1.5 → 2
        assert_eq!(compression_count(7, 100), 7);
        assert_eq!(compression_count(0, 50), 0);
    }

    #[test]
    fn test_selects_top_in_document_order() {
        let sentences = scored(&[1.0, 9.0, 3.0, 7.0, 5.0, 2.0, 8.0, 4.0, 6.0, 0.5]);
        let selected = SentenceSelector::new(60).select(sentences);

        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 6, 8]);
    }

    #[test]
    fn test_full_percentage_keeps_all_in_order() {
        let sentences = scored(&[3.0, 1.0, 2.0]);
        let selected = SentenceSelector::new(100).select(sentences.clone());
        assert_eq!(selected, sentences);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let sentences = scored(&[5.0, 5.0, 5.0, 1.0]);
        let selected = SentenceSelector::new(50).select(sentences);
        let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(SentenceSelector::new(50).select(Vec::new()).is_empty());
    }
}
