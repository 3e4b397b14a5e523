//! Symmetric link scoring
//!
//! Each sentence is scored twice: once against the sentences to its right and
//! once against the sentences to its left. A score is the sentence's own term
//! weight, plus its links to the other side, plus a positional bonus that
//! favours the start of the document in both directions.
//!
//! Link weight: for every stem of sentence `i` and every sentence `j` on the
//! scanned side that also contains it, add `max(count_i, count_j)`. A stem
//! repeated in several neighbours is counted once per neighbour.

use crate::types::{SentenceTermFrequency, TermWeightTable};
use rayon::prelude::*;

/// Side of the document a pass links against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Sentences with a smaller index
    Left,
    /// Sentences with a larger index
    Right,
}

/// Positional bonus for the sentence at 0-based `position`
#[inline]
pub fn positional_bonus(position: usize) -> f64 {
    10.0 / (position as f64 + 1.0)
}

/// Σ table weight × count over the stems of a sentence
pub fn own_weight(table: &TermWeightTable, sentence: &SentenceTermFrequency) -> f64 {
    sentence
        .iter()
        .map(|(stem, count)| table.weight_or_zero(stem) * count as f64)
        .sum()
}

/// Link weight between `sentence` and each of `neighbours`
pub fn context_weight(
    sentence: &SentenceTermFrequency,
    neighbours: &[SentenceTermFrequency],
) -> f64 {
    let mut total = 0usize;
    for (stem, count) in sentence.iter() {
        for other in neighbours {
            if let Some(other_count) = other.get(stem) {
                total += count.max(other_count);
            }
        }
    }
    total as f64
}

fn pass_score(
    table: &TermWeightTable,
    sentences: &[SentenceTermFrequency],
    position: usize,
    direction: Direction,
) -> f64 {
    let sentence = &sentences[position];
    let neighbours = match direction {
        Direction::Left => &sentences[..position],
        Direction::Right => &sentences[position + 1..],
    };
    own_weight(table, sentence) + context_weight(sentence, neighbours) + positional_bonus(position)
}

/// Scores of one directional pass, aligned with `sentences`
pub fn directional_scores(
    table: &TermWeightTable,
    sentences: &[SentenceTermFrequency],
    direction: Direction,
) -> Vec<f64> {
    (0..sentences.len())
        .map(|i| pass_score(table, sentences, i, direction))
        .collect()
}

/// Rightward pass: links to later sentences
pub fn rightward_scores(table: &TermWeightTable, sentences: &[SentenceTermFrequency]) -> Vec<f64> {
    directional_scores(table, sentences, Direction::Right)
}

/// Leftward pass: links to earlier sentences
pub fn leftward_scores(table: &TermWeightTable, sentences: &[SentenceTermFrequency]) -> Vec<f64> {
    directional_scores(table, sentences, Direction::Left)
}

/// Leftward + rightward score per sentence position
pub fn symmetric_scores(table: &TermWeightTable, sentences: &[SentenceTermFrequency]) -> Vec<f64> {
    let left = leftward_scores(table, sentences);
    let right = rightward_scores(table, sentences);
    combine(left, right)
}

/// Same result as [`symmetric_scores`], computing the passes on the Rayon
/// pool. Both passes read the same immutable slice.
pub fn symmetric_scores_parallel(
    table: &TermWeightTable,
    sentences: &[SentenceTermFrequency],
) -> Vec<f64> {
    let pass = |direction| -> Vec<f64> {
        (0..sentences.len())
            .into_par_iter()
            .map(|i| pass_score(table, sentences, i, direction))
            .collect()
    };
    let (left, right) = rayon::join(|| pass(Direction::Left), || pass(Direction::Right));
    combine(left, right)
}

fn combine(left: Vec<f64>, right: Vec<f64>) -> Vec<f64> {
    debug_assert_eq!(left.len(), right.len());
    left.into_iter().zip(right).map(|(l, r)| l + r).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(pairs: &[(&str, usize)]) -> SentenceTermFrequency {
        SentenceTermFrequency::from_counts(pairs.iter().map(|(s, c)| (*s, *c)))
    }

    #[test]
    fn test_positional_bonus() {
        assert_eq!(positional_bonus(0), 10.0);
        assert_eq!(positional_bonus(4), 2.0);
    }

    #[test]
    fn test_context_counts_each_reoccurrence() {
        // "war" in sentences 0 (x2), 2 (x1) and 4 (x3)
        let sentences = vec![
            tf(&[("war", 2), ("peace", 1)]),
            tf(&[("army", 1)]),
            tf(&[("war", 1)]),
            tf(&[("front", 1)]),
            tf(&[("war", 3)]),
        ];
        let table = TermWeightTable::new();
        let right = rightward_scores(&table, &sentences);

        // sentence 0: max(2,1) + max(2,3) = 5, bonus 10
        assert!((right[0] - 15.0).abs() < 1e-12);
        // last sentence has nothing to its right
        assert!((right[4] - positional_bonus(4)).abs() < 1e-12);

        let left = leftward_scores(&table, &sentences);
        // first sentence has nothing to its left
        assert!((left[0] - 10.0).abs() < 1e-12);
        // sentence 4: max(3,2) + max(3,1) = 6
        assert!((left[4] - (6.0 + positional_bonus(4))).abs() < 1e-12);
    }

    #[test]
    fn test_six_sentence_example() {
        // Three paragraphs of two sentences, "война" in sentences 0 and 4
        let sentences = vec![
            tf(&[("война", 2)]),
            tf(&[("мир", 1)]),
            tf(&[("армия", 1)]),
            tf(&[("фронт", 1)]),
            tf(&[("война", 1)]),
            tf(&[("победа", 1)]),
        ];
        let table = TermWeightTable::from_pairs([("война", 0.25)]);
        let right = rightward_scores(&table, &sentences);

        let own = 0.25 * 2.0;
        let context = 2.0; // max(2, 1)
        assert!((right[0] - (own + context + 10.0)).abs() < 1e-12);
    }

    #[test]
    fn test_own_weight_uses_counts() {
        let table = TermWeightTable::from_pairs([("a", 0.5), ("b", 0.25)]);
        let s = tf(&[("a", 2), ("b", 1), ("c", 4)]);
        assert!((own_weight(&table, &s) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_is_sum_of_passes() {
        let sentences = vec![
            tf(&[("a", 1), ("b", 2)]),
            tf(&[("b", 1)]),
            tf(&[("a", 3), ("c", 1)]),
        ];
        let table = TermWeightTable::from_pairs([("a", 0.4), ("b", 0.3)]);
        let left = leftward_scores(&table, &sentences);
        let right = rightward_scores(&table, &sentences);
        let both = symmetric_scores(&table, &sentences);

        for i in 0..sentences.len() {
            assert!((both[i] - (left[i] + right[i])).abs() < 1e-12);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sentences: Vec<_> = (0..40)
            .map(|i| tf(&[("common", 1 + i % 3), ("rare", i % 2), ("x", 1)]))
            .collect();
        let table = TermWeightTable::from_pairs([("common", 0.2), ("x", 0.1)]);

        assert_eq!(
            symmetric_scores(&table, &sentences),
            symmetric_scores_parallel(&table, &sentences)
        );
    }

    #[test]
    fn test_empty_input() {
        let table = TermWeightTable::new();
        assert!(symmetric_scores(&table, &[]).is_empty());
    }
}
