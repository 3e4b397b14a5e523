//! Core types for symmetric_summarizer
//!
//! This module defines the per-run data structures that flow between the
//! scoring stages, the summary result, and the summarizer configuration.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Stemmed tokens
// ============================================================================

/// A content word that survived filtering, with its normalized stem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmedToken {
    /// Normalized root form used for weighting
    pub stem: String,
    /// Surface form as it appeared in the sentence
    pub surface: String,
}

impl StemmedToken {
    /// Create a new stemmed token
    pub fn new(stem: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            surface: surface.into(),
        }
    }

    /// Whether this token is one of the emphatic marks `?` or `!`
    pub fn is_emphatic_mark(&self) -> bool {
        matches!(self.stem.as_str(), "?" | "!")
    }
}

/// The stemmed view of one sentence, parallel in index space to the raw one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemmedSentence {
    pub tokens: Vec<StemmedToken>,
}

impl StemmedSentence {
    pub fn new(tokens: Vec<StemmedToken>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the stems in sentence order
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.stem.as_str())
    }

    /// A sentence is emphatic when its last token is `?` or `!`
    pub fn is_emphatic(&self) -> bool {
        self.tokens
            .last()
            .map(StemmedToken::is_emphatic_mark)
            .unwrap_or(false)
    }

    /// Build the stem → count map for this sentence
    pub fn term_frequency(&self) -> SentenceTermFrequency {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for stem in self.stems() {
            *counts.entry(stem.to_string()).or_insert(0) += 1;
        }
        SentenceTermFrequency { counts }
    }
}

impl FromIterator<StemmedToken> for StemmedSentence {
    fn from_iter<I: IntoIterator<Item = StemmedToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Sentence term frequency
// ============================================================================

/// Stem occurrence counts for a single sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceTermFrequency {
    counts: FxHashMap<String, usize>,
}

impl SentenceTermFrequency {
    /// Build from explicit `(stem, count)` pairs; zero counts are ignored
    pub fn from_counts<S: Into<String>>(pairs: impl IntoIterator<Item = (S, usize)>) -> Self {
        let counts = pairs
            .into_iter()
            .filter(|(_, c)| *c > 0)
            .map(|(s, c)| (s.into(), c))
            .collect();
        Self { counts }
    }

    /// Occurrence count of `stem`, if present
    pub fn get(&self, stem: &str) -> Option<usize> {
        self.counts.get(stem).copied()
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.counts.contains_key(stem)
    }

    /// Number of distinct stems
    pub fn distinct_stems(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all occurrence counts
    pub fn total_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(s, c)| (s.as_str(), *c))
    }
}

// ============================================================================
// Term weight table
// ============================================================================

/// Stem → nonnegative weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermWeightTable {
    weights: FxHashMap<String, f64>,
}

impl TermWeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self {
            weights: pairs.into_iter().map(|(s, w)| (s.into(), w)).collect(),
        }
    }

    pub fn get(&self, stem: &str) -> Option<f64> {
        self.weights.get(stem).copied()
    }

    /// Weight of `stem`, or 0 when the stem is not in the table
    pub fn weight_or_zero(&self, stem: &str) -> f64 {
        self.get(stem).unwrap_or(0.0)
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.weights.contains_key(stem)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Arithmetic mean of all weights (0 for an empty table)
    pub fn mean(&self) -> f64 {
        if self.weights.is_empty() {
            return 0.0;
        }
        self.weights.values().sum::<f64>() / self.weights.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(s, w)| (s.as_str(), *w))
    }

    /// Return a copy where every stem selected by `select` is multiplied by `factor`
    pub fn scaled<'a>(&self, stems: impl IntoIterator<Item = &'a str>, factor: f64) -> Self {
        let mut weights = self.weights.clone();
        for stem in stems {
            if let Some(w) = weights.get_mut(stem) {
                *w *= factor;
            }
        }
        Self { weights }
    }

    /// Keep only entries strictly above the mean weight
    pub fn prune_above_mean(&self) -> Self {
        let mean = self.mean();
        Self {
            weights: self
                .weights
                .iter()
                .filter(|(_, w)| **w > mean)
                .map(|(s, w)| (s.clone(), *w))
                .collect(),
        }
    }
}

// ============================================================================
// Scored sentence & summary
// ============================================================================

/// An original sentence with its final score and position in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// The original sentence text
    pub text: String,
    /// Final relevance score
    pub score: f64,
    /// 0-based index in document order
    pub index: usize,
}

impl ScoredSentence {
    pub fn new(text: impl Into<String>, score: f64, index: usize) -> Self {
        Self {
            text: text.into(),
            score,
            index,
        }
    }
}

/// How a summarization run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Sentences were scored and selected
    Complete,
    /// The document has fewer sentences than the minimum
    InputTooShort,
    /// No content stems survived filtering and weighting
    EmptyVocabulary,
    /// No sentence had enough distinct stems to be scored
    NoEligibleSentences,
}

impl SummaryOutcome {
    /// Message reported to the caller for non-complete runs
    pub fn message(&self) -> &'static str {
        match self {
            SummaryOutcome::Complete => "summary complete",
            SummaryOutcome::InputTooShort => "text should be at least 3 sentences long",
            SummaryOutcome::EmptyVocabulary => "there are no words to process",
            SummaryOutcome::NoEligibleSentences => "no sentence is long enough to be scored",
        }
    }
}

/// Result of one summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<ScoredSentence>,
    pub outcome: SummaryOutcome,
    /// Sentence count of the input document
    pub total_sentences: usize,
    /// Sentences that passed the eligibility filter
    pub eligible_sentences: usize,
}

impl Summary {
    /// An empty summary carrying the reason it is empty
    pub fn empty(outcome: SummaryOutcome, total_sentences: usize) -> Self {
        Self {
            sentences: Vec::new(),
            outcome,
            total_sentences,
            eligible_sentences: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected sentence texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// One selected sentence per line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for sentence in &self.sentences {
            out.push_str(&sentence.text);
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Enable the rhetorical-indicator reweighting step
    #[serde(default = "default_indicators")]
    pub indicators: bool,
    /// Use the alternate indicator template collection
    #[serde(default)]
    pub use_template_set_variant: bool,
    /// Compression target: percent of eligible sentences to keep (1..=100)
    #[serde(default = "default_percentage")]
    pub percentage: u32,
    /// Language code for stopwords and stemming (e.g. "ru", "en")
    #[serde(default = "default_language")]
    pub language: String,
    /// Directory holding `templates_1/` and `templates_2/`
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
    /// Tagging lexicon (`word<TAB>tag<TAB>normal` lines) for the template
    /// detector
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
    /// Run the leftward and rightward link passes concurrently
    #[serde(default)]
    pub parallel: bool,
}

fn default_indicators() -> bool {
    true
}

fn default_percentage() -> u32 {
    10
}

fn default_language() -> String {
    "ru".to_string()
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            indicators: default_indicators(),
            use_template_set_variant: false,
            percentage: default_percentage(),
            language: default_language(),
            template_dir: None,
            lexicon: None,
            parallel: false,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.percentage) {
            return Err(SummarizerError::invalid_config(format!(
                "percentage must be between 1 and 100, got {}",
                self.percentage
            )));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizerError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: enable or disable indicator reweighting
    pub fn with_indicators(mut self, indicators: bool) -> Self {
        self.indicators = indicators;
        self
    }

    /// Builder method: choose the alternate template collection
    pub fn with_template_set_variant(mut self, variant: bool) -> Self {
        self.use_template_set_variant = variant;
        self
    }

    /// Builder method: set compression percentage
    pub fn with_percentage(mut self, percentage: u32) -> Self {
        self.percentage = percentage;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set the template directory
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Builder method: set the tagging lexicon
    pub fn with_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = Some(path.into());
        self
    }

    /// Builder method: run link passes concurrently
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
