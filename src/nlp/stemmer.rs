//! Token normalization: lemmatize, then Snowball-stem
//!
//! The stemmer handle is created once per normalizer and is read-only
//! afterwards, so one normalizer can serve any number of runs.

use crate::errors::Result;
use crate::pipeline::traits::{Lemmatizer, LowercaseLemmatizer, Normalizer};
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;
use std::sync::Arc;

/// Lemmatizer + Snowball stemmer
pub struct SnowballNormalizer {
    stemmer: Stemmer,
    lemmatizer: Arc<dyn Lemmatizer>,
    language: String,
}

impl fmt::Debug for SnowballNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballNormalizer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Default for SnowballNormalizer {
    fn default() -> Self {
        Self::new("ru")
    }
}

impl SnowballNormalizer {
    /// Create a normalizer for the given language (Russian when unknown)
    pub fn new(language: &str) -> Self {
        Self {
            stemmer: Stemmer::create(Self::algorithm(language)),
            lemmatizer: Arc::new(LowercaseLemmatizer),
            language: language.to_lowercase(),
        }
    }

    /// Use a morphological lemmatizer before stemming
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    fn algorithm(language: &str) -> Algorithm {
        match language.to_lowercase().as_str() {
            "en" | "english" => Algorithm::English,
            "de" | "german" => Algorithm::German,
            "fr" | "french" => Algorithm::French,
            "es" | "spanish" => Algorithm::Spanish,
            "it" | "italian" => Algorithm::Italian,
            "pt" | "portuguese" => Algorithm::Portuguese,
            "nl" | "dutch" => Algorithm::Dutch,
            "sv" | "swedish" => Algorithm::Swedish,
            "no" | "norwegian" => Algorithm::Norwegian,
            "da" | "danish" => Algorithm::Danish,
            "fi" | "finnish" => Algorithm::Finnish,
            "hu" | "hungarian" => Algorithm::Hungarian,
            "tr" | "turkish" => Algorithm::Turkish,
            _ => Algorithm::Russian,
        }
    }
}

impl Normalizer for SnowballNormalizer {
    fn normalize(&self, token: &str) -> Result<String> {
        // Snowball expects lowercase input; the lemmatizer may not lowercase.
        let lemma = self.lemmatizer.lemmatize(token).to_lowercase();
        Ok(self.stemmer.stem(&lemma).into_owned())
    }
}
