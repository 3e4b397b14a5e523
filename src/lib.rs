//! # symmetric_summarizer
//!
//! Extractive summarization by symmetric sentence linking.
//!
//! Sentences are scored by how strongly their weighted terms connect them to
//! the sentences before and after them, refined by proper-noun, digit and
//! length layers, optionally reweighted by rhetorical indicator templates,
//! and the top percentage is returned in document order.
//!
//! ## Features
//!
//! - **Discourse-aware weights**: paragraph-boundary, emphatic-sentence and
//!   proper-noun boosts over relative term frequency
//! - **Pluggable linguistics**: segmenter, tokenizer, normalizer, stopwords
//!   and indicator detector are injected behind traits
//! - **Parallel link passes**: optional Rayon execution with identical results
//! - **Python bindings**: via PyO3 behind the `python` feature
//!
//! ```no_run
//! use symmetric_summarizer::{Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::new(SummarizerConfig::default().with_percentage(30))?;
//! let summary = summarizer.summarize("...")?;
//! println!("{}", summary.to_text());
//! # Ok::<(), symmetric_summarizer::SummarizerError>(())
//! ```

pub mod document;
pub mod errors;
pub mod indicators;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;
pub mod weighting;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use document::{RawDocument, StemmedDocument, StructuredDocument};
pub use errors::{Result, SummarizerError};
pub use types::{
    ScoredSentence, SentenceTermFrequency, StemmedSentence, StemmedToken, Summary,
    SummarizerConfig, SummaryOutcome, TermWeightTable,
};

// Re-export main functionality
pub use indicators::{
    Aspect, AspectMatch, AspectMatches, IndicatorDetector, IndicatorReweighter, LexiconTagger,
    PosTagger, TaggedWord, TemplateIndicatorDetector, TemplateSet,
};
pub use nlp::{
    stemmer::SnowballNormalizer,
    stopwords::StopwordFilter,
    tokenizer::{RegexTokenizer, UnicodeSegmenter},
};
pub use pipeline::{
    Lemmatizer, Normalizer, Segmenter, StopwordCheck, Summarizer, SummarizerBuilder,
    WordTokenizer,
};
pub use summarizer::selector::{compression_count, SentenceSelector};
pub use weighting::{compute_term_weights, TermWeighter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
