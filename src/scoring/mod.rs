//! Sentence scoring
//!
//! - [`links`]: symmetric left/right link scores
//! - [`refine`]: proper-noun, digit and length-normalization layers

pub mod links;
pub mod refine;

pub use links::{symmetric_scores, symmetric_scores_parallel};
pub use refine::CompositeRefiner;
