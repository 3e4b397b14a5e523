//! Term weighting
//!
//! Base weights from stem frequencies, rescaled by an ordered chain of
//! discourse boosts and finally pruned to the stems above the mean weight.

pub mod base;
pub mod boosts;

use crate::document::StemmedDocument;
use crate::types::TermWeightTable;
use boosts::{default_boosts, BoostContext, WeightBoost};
use rustc_hash::FxHashSet;
use tracing::debug;

pub use base::base_weights;

/// Computes the final term weight table for a document
pub struct TermWeighter {
    boosts: Vec<Box<dyn WeightBoost>>,
}

impl std::fmt::Debug for TermWeighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.boosts.iter().map(|b| b.name()).collect();
        f.debug_struct("TermWeighter").field("boosts", &names).finish()
    }
}

impl Default for TermWeighter {
    fn default() -> Self {
        Self::new()
    }
}

impl TermWeighter {
    /// Weighter with the standard boundary → emphatic → proper-noun chain
    pub fn new() -> Self {
        Self {
            boosts: default_boosts(),
        }
    }

    /// Weighter with a custom boost chain
    pub fn with_boosts(boosts: Vec<Box<dyn WeightBoost>>) -> Self {
        Self { boosts }
    }

    /// Base weights, boosted and pruned. Empty when nothing survives.
    pub fn compute(
        &self,
        document: &StemmedDocument,
        proper_nouns: &FxHashSet<String>,
    ) -> TermWeightTable {
        let base = base_weights(document);
        if base.is_empty() {
            return base;
        }

        let ctx = BoostContext::new(document, &base, proper_nouns);
        let boosted = self.boosts.iter().fold(base, |table, boost| {
            let next = boost.apply(&table, &ctx);
            debug!(boost = boost.name(), mean = next.mean(), "weight boost applied");
            next
        });

        let pruned = boosted.prune_above_mean();
        debug!(
            before = boosted.len(),
            after = pruned.len(),
            "weight table pruned at mean"
        );
        pruned
    }
}

/// Convenience function: compute weights with the standard boost chain
pub fn compute_term_weights(
    document: &StemmedDocument,
    proper_nouns: &FxHashSet<String>,
) -> TermWeightTable {
    TermWeighter::new().compute(document, proper_nouns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StemmedSentence, StemmedToken};

    fn sentence(stems: &[&str]) -> StemmedSentence {
        stems.iter().map(|s| StemmedToken::new(*s, *s)).collect()
    }

    #[test]
    fn test_prunes_to_above_mean() {
        let doc = StemmedDocument::new(vec![
            vec![sentence(&["war", "army", "war"]), sentence(&["peace"])],
            vec![sentence(&["war", "army", "front"])],
        ]);
        let table = compute_term_weights(&doc, &FxHashSet::default());

        // base keeps war (3) and army (2); all boundary, equal boost → war only
        assert_eq!(table.len(), 1);
        assert!(table.contains("war"));
    }

    #[test]
    fn test_all_equal_weights_prune_to_empty() {
        let doc = StemmedDocument::new(vec![vec![sentence(&["a", "b"]), sentence(&["c", "d"])]]);
        assert!(compute_term_weights(&doc, &FxHashSet::default()).is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = StemmedDocument::new(vec![vec![sentence(&[])]]);
        assert!(compute_term_weights(&doc, &FxHashSet::default()).is_empty());
    }

    #[test]
    fn test_custom_chain_without_boosts() {
        let doc = StemmedDocument::new(vec![vec![
            sentence(&["a", "a", "a", "b", "b"]),
            sentence(&["b", "c"]),
        ]]);
        let table = TermWeighter::with_boosts(Vec::new()).compute(&doc, &FxHashSet::default());

        // base: a 3/7, b 3/7 (c dropped); equal → nothing strictly above mean
        assert!(table.is_empty());
    }

    #[test]
    fn test_weights_nonnegative() {
        let doc = StemmedDocument::new(vec![
            vec![sentence(&["x", "y", "x", "?"]), sentence(&["y", "z"])],
            vec![sentence(&["x", "x", "!"])],
        ]);
        let table = compute_term_weights(&doc, &FxHashSet::default());
        assert!(table.iter().all(|(_, w)| w >= 0.0));
    }
}
