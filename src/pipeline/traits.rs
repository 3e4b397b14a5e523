//! Collaborator trait definitions for the pipeline.
//!
//! Each trait is one linguistic service the scoring core depends on. The
//! services are stateless after construction, so they are shared behind
//! `Arc` and must be `Send + Sync`.

use crate::errors::Result;

// ============================================================================
// Segmenter: raw text to paragraphs of sentences
// ============================================================================

/// Splits raw text into ordered paragraphs of ordered sentences.
///
/// # Contract
///
/// - **Deterministic**: same input → same output.
/// - Sentences are returned trimmed; empty sentences and empty paragraphs
///   may be returned and are dropped by the document container.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<Vec<String>>>;
}

// ============================================================================
// WordTokenizer: sentence to tokens
// ============================================================================

/// Splits one sentence into ordered surface tokens.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

// ============================================================================
// Normalizer: token to stem
// ============================================================================

/// Maps a surface token to the stem used for weighting.
///
/// Must be a pure function of the token: two equal tokens always produce the
/// same stem.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, token: &str) -> Result<String>;
}

/// Maps a surface token to its dictionary form before stemming.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> String;
}

/// Lemmatizer that only lowercases, used when no morphological
/// dictionary is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseLemmatizer;

impl Lemmatizer for LowercaseLemmatizer {
    #[inline]
    fn lemmatize(&self, token: &str) -> String {
        token.to_lowercase()
    }
}

impl<F> Lemmatizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn lemmatize(&self, token: &str) -> String {
        self(token)
    }
}

// ============================================================================
// StopwordCheck
// ============================================================================

/// Decides whether a token is a stopword.
pub trait StopwordCheck: Send + Sync {
    fn is_stopword(&self, token: &str) -> bool;
}
