//! Pipeline collaborators and execution.
//!
//! ## Submodules
//!
//! - [`traits`]: Collaborator trait definitions (segmenter, tokenizer,
//!   normalizer, stopword check)
//! - [`runner`]: [`Summarizer`] orchestration and its builder

pub mod runner;
pub mod traits;

pub use runner::{Summarizer, SummarizerBuilder, MIN_SENTENCES};
pub use traits::{
    Lemmatizer, LowercaseLemmatizer, Normalizer, Segmenter, StopwordCheck, WordTokenizer,
};
