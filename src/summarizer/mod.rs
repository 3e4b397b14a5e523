//! Summarization components
//!
//! Provides percentage-based selection of the final sentences; the
//! [`Summarizer`] itself lives in [`crate::pipeline::runner`].

pub mod selector;

pub use crate::pipeline::runner::{Summarizer, SummarizerBuilder};
pub use selector::{compression_count, SentenceSelector};
