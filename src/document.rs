//! Structured document
//!
//! A paragraph → sentence hierarchy shared by the raw view (sentence text)
//! and the stemmed view ([`StemmedSentence`]). Both views are built from the
//! same segmentation, so the flattened sentence index is the same in both.

use crate::types::{SentenceTermFrequency, StemmedSentence};
use rustc_hash::FxHashMap;

/// Ordered paragraphs of ordered sentences
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredDocument<T> {
    paragraphs: Vec<Vec<T>>,
}

/// The raw sentence-text view of a document
pub type RawDocument = StructuredDocument<String>;

/// The stemmed view of a document
pub type StemmedDocument = StructuredDocument<StemmedSentence>;

impl<T> StructuredDocument<T> {
    /// Build a document; paragraphs without sentences are dropped
    pub fn new(paragraphs: Vec<Vec<T>>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().filter(|p| !p.is_empty()).collect(),
        }
    }

    pub fn paragraphs(&self) -> &[Vec<T>] {
        &self.paragraphs
    }

    /// All sentences in document order
    pub fn sentences(&self) -> impl Iterator<Item = &T> {
        self.paragraphs.iter().flatten()
    }

    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// First and last sentence of each paragraph (the only one if single)
    pub fn boundary_sentences(&self) -> impl Iterator<Item = &T> {
        self.paragraphs.iter().flat_map(|p| {
            let first = p.first();
            let last = if p.len() > 1 { p.last() } else { None };
            first.into_iter().chain(last)
        })
    }

    /// Map every sentence, keeping the paragraph structure
    pub fn map_sentences<U, F>(&self, mut f: F) -> StructuredDocument<U>
    where
        F: FnMut(&T) -> U,
    {
        StructuredDocument {
            paragraphs: self
                .paragraphs
                .iter()
                .map(|p| p.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Fallible variant of [`map_sentences`](Self::map_sentences)
    pub fn try_map_sentences<U, E, F>(&self, mut f: F) -> Result<StructuredDocument<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        let paragraphs = self
            .paragraphs
            .iter()
            .map(|p| p.iter().map(&mut f).collect::<Result<Vec<U>, E>>())
            .collect::<Result<Vec<_>, E>>()?;
        Ok(StructuredDocument { paragraphs })
    }
}

impl StructuredDocument<StemmedSentence> {
    /// Every stem of the document in order, duplicates included
    pub fn all_stems(&self) -> impl Iterator<Item = &str> {
        self.sentences().flat_map(StemmedSentence::stems)
    }

    /// Total number of stem occurrences in the document
    pub fn total_stem_count(&self) -> usize {
        self.sentences().map(StemmedSentence::len).sum()
    }

    /// Document-wide stem frequencies
    pub fn stem_frequencies(&self) -> FxHashMap<&str, usize> {
        let mut freqs: FxHashMap<&str, usize> = FxHashMap::default();
        for stem in self.all_stems() {
            *freqs.entry(stem).or_insert(0) += 1;
        }
        freqs
    }

    /// Per-sentence term frequency maps in document order
    pub fn term_frequencies(&self) -> Vec<SentenceTermFrequency> {
        self.sentences().map(StemmedSentence::term_frequency).collect()
    }

    /// Average number of stems per sentence (0 for an empty document)
    pub fn average_sentence_length(&self) -> f64 {
        let sentences = self.sentence_count();
        if sentences == 0 {
            return 0.0;
        }
        self.total_stem_count() as f64 / sentences as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StemmedToken;

    fn stemmed(stems: &[&str]) -> StemmedSentence {
        stems.iter().map(|s| StemmedToken::new(*s, *s)).collect()
    }

    #[test]
    fn test_sentences_flatten_in_order() {
        let doc = RawDocument::new(vec![
            vec!["a".into(), "b".into()],
            vec![],
            vec!["c".into()],
        ]);
        let all: Vec<&String> = doc.sentences().collect();
        assert_eq!(all, vec!["a", "b", "c"]);
        assert_eq!(doc.sentence_count(), 3);
        assert_eq!(doc.paragraphs().len(), 2);
    }

    #[test]
    fn test_boundary_sentences() {
        let doc = RawDocument::new(vec![
            vec!["p1s1".into(), "p1s2".into(), "p1s3".into()],
            vec!["p2s1".into()],
            vec!["p3s1".into(), "p3s2".into()],
        ]);
        let boundary: Vec<&String> = doc.boundary_sentences().collect();
        assert_eq!(boundary, vec!["p1s1", "p1s3", "p2s1", "p3s1", "p3s2"]);
    }

    #[test]
    fn test_map_keeps_structure() {
        let doc = RawDocument::new(vec![vec!["ab".into()], vec!["cde".into(), "f".into()]]);
        let lens = doc.map_sentences(|s| s.len());
        assert_eq!(lens.paragraphs(), &[vec![2], vec![3, 1]]);
    }

    #[test]
    fn test_stem_statistics() {
        let doc = StemmedDocument::new(vec![
            vec![stemmed(&["war", "peace"]), stemmed(&["war"])],
            vec![stemmed(&["war", "army", "?"])],
        ]);

        assert_eq!(doc.total_stem_count(), 6);
        assert_eq!(doc.stem_frequencies().get("war"), Some(&3));
        assert_eq!(doc.term_frequencies().len(), 3);
        assert!((doc.average_sentence_length() - 2.0).abs() < 1e-12);
    }
}
