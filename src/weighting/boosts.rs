//! Discourse-signal boosts applied to the base weight table
//!
//! Each boost reads an immutable table and returns a new one, so the chain
//! can be inspected one step at a time.

use crate::document::StemmedDocument;
use crate::types::{StemmedSentence, TermWeightTable};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Document statistics shared by every boost in a chain
#[derive(Debug, Clone)]
pub struct BoostContext {
    /// Distinct stems of the first and last sentence of each paragraph
    pub boundary_stems: FxHashSet<String>,
    /// `D / S` ratio, `None` when its denominator is zero
    pub boundary_ratio: Option<f64>,
    /// Distinct stems of `?`/`!` sentences, marks excluded
    pub emphatic_stems: FxHashSet<String>,
    /// Emphatic sentences / all sentences
    pub emphatic_ratio: f64,
    /// Stems detected as proper nouns
    pub proper_nouns: FxHashSet<String>,
}

impl BoostContext {
    /// Gather boost statistics against the base table
    pub fn new(
        document: &StemmedDocument,
        base: &TermWeightTable,
        proper_nouns: &FxHashSet<String>,
    ) -> Self {
        let boundary_stems: FxHashSet<String> = document
            .boundary_sentences()
            .flat_map(StemmedSentence::stems)
            .map(str::to_string)
            .collect();

        let boundary_ratio = Self::boundary_ratio(
            boundary_stems.iter().filter(|s| base.contains(s)).count(),
            boundary_stems.len(),
            document.total_stem_count(),
        );

        let emphatic: Vec<&StemmedSentence> =
            document.sentences().filter(|s| s.is_emphatic()).collect();
        let emphatic_stems: FxHashSet<String> = emphatic
            .iter()
            .flat_map(|s| s.tokens.iter())
            .filter(|t| !t.is_emphatic_mark())
            .map(|t| t.stem.clone())
            .collect();
        let sentence_count = document.sentence_count();
        let emphatic_ratio = if sentence_count == 0 {
            0.0
        } else {
            emphatic.len() as f64 / sentence_count as f64
        };

        Self {
            boundary_stems,
            boundary_ratio,
            emphatic_stems,
            emphatic_ratio,
            proper_nouns: proper_nouns.clone(),
        }
    }

    /// `D / S` where `D` = boundary stems known to the table / boundary stems
    /// and `S` = boundary stems / all stem occurrences in the document.
    pub fn boundary_ratio(in_table: usize, boundary: usize, total_stems: usize) -> Option<f64> {
        if boundary == 0 || total_stems == 0 {
            return None;
        }
        let d = in_table as f64 / boundary as f64;
        let s = boundary as f64 / total_stems as f64;
        Some(d / s)
    }
}

/// One rescaling step of the term weight table
pub trait WeightBoost: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce the boosted table; `table` itself is not modified
    fn apply(&self, table: &TermWeightTable, ctx: &BoostContext) -> TermWeightTable;
}

/// Boost for stems of paragraph-boundary sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundarySentenceBoost;

impl WeightBoost for BoundarySentenceBoost {
    fn name(&self) -> &'static str {
        "boundary_sentences"
    }

    fn apply(&self, table: &TermWeightTable, ctx: &BoostContext) -> TermWeightTable {
        match ctx.boundary_ratio {
            Some(ratio) => table.scaled(ctx.boundary_stems.iter().map(String::as_str), ratio),
            None => {
                debug!(boost = self.name(), "zero denominator, boost skipped");
                table.clone()
            }
        }
    }
}

/// Boost for stems of questions and exclamations
#[derive(Debug, Clone, Copy, Default)]
pub struct EmphaticSentenceBoost;

impl WeightBoost for EmphaticSentenceBoost {
    fn name(&self) -> &'static str {
        "emphatic_sentences"
    }

    fn apply(&self, table: &TermWeightTable, ctx: &BoostContext) -> TermWeightTable {
        table.scaled(
            ctx.emphatic_stems.iter().map(String::as_str),
            ctx.emphatic_ratio,
        )
    }
}

/// Boost for proper-noun stems, stacking with the boundary boost
#[derive(Debug, Clone, Copy, Default)]
pub struct ProperNounBoost;

impl WeightBoost for ProperNounBoost {
    fn name(&self) -> &'static str {
        "proper_nouns"
    }

    fn apply(&self, table: &TermWeightTable, ctx: &BoostContext) -> TermWeightTable {
        match ctx.boundary_ratio {
            Some(ratio) => table.scaled(ctx.proper_nouns.iter().map(String::as_str), ratio),
            None => {
                debug!(boost = self.name(), "zero denominator, boost skipped");
                table.clone()
            }
        }
    }
}

/// The boosts in application order
pub fn default_boosts() -> Vec<Box<dyn WeightBoost>> {
    vec![
        Box::new(BoundarySentenceBoost),
        Box::new(EmphaticSentenceBoost),
        Box::new(ProperNounBoost),
    ]
}
