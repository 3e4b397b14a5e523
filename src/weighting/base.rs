//! Base term weights from document frequency statistics

use crate::document::StemmedDocument;
use crate::types::TermWeightTable;

/// Relative frequency of every stem seen at least as often as the mean stem.
///
/// Stems below the mean frequency are left out of the table entirely.
pub fn base_weights(document: &StemmedDocument) -> TermWeightTable {
    let freqs = document.stem_frequencies();
    if freqs.is_empty() {
        return TermWeightTable::new();
    }

    let total: usize = freqs.values().sum();
    let mean_freq = total as f64 / freqs.len() as f64;

    TermWeightTable::from_pairs(
        freqs
            .into_iter()
            .filter(|(_, freq)| *freq as f64 >= mean_freq)
            .map(|(stem, freq)| (stem, freq as f64 / total as f64)),
    )
}
