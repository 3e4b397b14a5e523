//! Summarizer runner: orchestrates the stages of one summarization run.
//!
//! A [`Summarizer`] holds its collaborators behind `Arc` and is immutable
//! after construction. Every intermediate (stemmed document, weight table,
//! score vectors) lives only for the duration of a single call.
//!
//! # Stage order
//!
//! | Stage | Produces | Short-circuit |
//! |-------|----------|---------------|
//! | segment | paragraphs of raw sentences | fewer than 3 sentences |
//! | normalize | stemmed document | no stems at all |
//! | weights | pruned [`TermWeightTable`](crate::types::TermWeightTable) | empty table |
//! | links | symmetric scores | |
//! | refine | refined scores | |
//! | indicators | eligible [`ScoredSentence`]s | none eligible |
//! | select | [`Summary`] | |

use crate::document::{RawDocument, StemmedDocument};
use crate::errors::{Result, SummarizerError};
use crate::indicators::{
    IndicatorDetector, IndicatorReweighter, LexiconTagger, PosTagger, TemplateIndicatorDetector,
    TemplateSet,
};
use crate::nlp::proper_nouns::detect_proper_nouns;
use crate::nlp::stemmer::SnowballNormalizer;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{RegexTokenizer, UnicodeSegmenter};
use crate::pipeline::traits::{Normalizer, Segmenter, StopwordCheck, WordTokenizer};
use crate::scoring::{symmetric_scores, symmetric_scores_parallel, CompositeRefiner};
use crate::summarizer::SentenceSelector;
use crate::types::{
    ScoredSentence, StemmedSentence, StemmedToken, Summary, SummarizerConfig, SummaryOutcome,
};
use crate::weighting::TermWeighter;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Enter a tracing span for a summarizer stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_WEIGHTS: &str = "weights";
pub const STAGE_LINKS: &str = "links";
pub const STAGE_REFINE: &str = "refine";
pub const STAGE_INDICATORS: &str = "indicators";
pub const STAGE_SELECT: &str = "select";

/// Documents with fewer sentences are not summarized
pub const MIN_SENTENCES: usize = 3;

/// Whether a surface token takes part in weighting: an emphatic mark, or a
/// non-stopword starting with a word character.
pub fn is_content_token(token: &str, stopwords: &dyn StopwordCheck) -> bool {
    if is_emphatic(token) {
        return true;
    }
    let starts_with_word = token
        .chars()
        .next()
        .map_or(false, |c| c.is_alphanumeric() || c == '_');
    starts_with_word && !stopwords.is_stopword(token)
}

fn is_emphatic(token: &str) -> bool {
    matches!(token, "?" | "!")
}

// ============================================================================
// Summarizer
// ============================================================================

/// Symmetric extractive summarizer
pub struct Summarizer {
    config: SummarizerConfig,
    segmenter: Arc<dyn Segmenter>,
    tokenizer: Arc<dyn WordTokenizer>,
    normalizer: Arc<dyn Normalizer>,
    stopwords: Arc<dyn StopwordCheck>,
    weighter: TermWeighter,
    reweighter: IndicatorReweighter,
    selector: SentenceSelector,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .field("weighter", &self.weighter)
            .field("reweighter", &self.reweighter)
            .finish_non_exhaustive()
    }
}

impl Summarizer {
    /// Summarizer with the default collaborators for `config.language`.
    ///
    /// Template indicators are tagged with the lexicon at `config.lexicon`.
    /// Without one, use [`SummarizerBuilder::tagger`] or
    /// [`SummarizerBuilder::detector`].
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        SummarizerBuilder::new(config).build()
    }

    /// Start a builder for injecting collaborators
    pub fn builder(config: SummarizerConfig) -> SummarizerBuilder {
        SummarizerBuilder::new(config)
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Whether sentences are reweighted by rhetorical indicators
    pub fn indicators_enabled(&self) -> bool {
        self.reweighter.is_enabled()
    }

    /// Summarize a file read as UTF-8 text
    pub fn summarize_file(&self, path: impl AsRef<Path>) -> Result<Summary> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SummarizerError::io(format!("{}: {}", path.display(), e)))?;
        self.summarize(&text)
    }

    /// Summarize raw text
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        let paragraphs = {
            trace_stage!(STAGE_SEGMENT);
            self.segmenter.segment(text)?
        };
        self.summarize_document(paragraphs)
    }

    /// Summarize a document that is already split into paragraphs of
    /// sentences
    pub fn summarize_document(&self, paragraphs: Vec<Vec<String>>) -> Result<Summary> {
        let raw = RawDocument::new(paragraphs);
        let total = raw.sentence_count();

        if total < MIN_SENTENCES {
            let outcome = SummaryOutcome::InputTooShort;
            warn!(sentences = total, "{}", outcome.message());
            return Ok(Summary::empty(outcome, total));
        }

        let stemmed = {
            trace_stage!(STAGE_NORMALIZE);
            raw.try_map_sentences(|sentence| self.stem_sentence(sentence))?
        };
        debug_assert_eq!(raw.sentence_count(), stemmed.sentence_count());

        if stemmed.total_stem_count() == 0 {
            return Ok(self.empty_vocabulary(total));
        }

        self.score_and_select(&raw, &stemmed)
    }

    fn score_and_select(&self, raw: &RawDocument, stemmed: &StemmedDocument) -> Result<Summary> {
        let total = raw.sentence_count();
        let proper_nouns = detect_proper_nouns(stemmed);

        let weights = {
            trace_stage!(STAGE_WEIGHTS);
            self.weighter.compute(stemmed, &proper_nouns)
        };
        if weights.is_empty() {
            return Ok(self.empty_vocabulary(total));
        }
        debug!(
            terms = weights.len(),
            proper_nouns = proper_nouns.len(),
            "term weights computed"
        );

        let frequencies = stemmed.term_frequencies();

        let scores = {
            trace_stage!(STAGE_LINKS);
            if self.config.parallel {
                symmetric_scores_parallel(&weights, &frequencies)
            } else {
                symmetric_scores(&weights, &frequencies)
            }
        };
        debug_assert_eq!(scores.len(), total);

        let refined = {
            trace_stage!(STAGE_REFINE);
            CompositeRefiner::new(&proper_nouns, stemmed.average_sentence_length())
                .refine_all(&frequencies, &scores)
        };
        debug_assert_eq!(refined.len(), total);

        let texts: Vec<&str> = raw.sentences().map(String::as_str).collect();
        let scored: Vec<ScoredSentence> = {
            trace_stage!(STAGE_INDICATORS);
            self.reweighter.reweight(&texts, &frequencies, &refined)?
        };
        if scored.is_empty() {
            let outcome = SummaryOutcome::NoEligibleSentences;
            warn!(sentences = total, "{}", outcome.message());
            return Ok(Summary::empty(outcome, total));
        }

        let eligible = scored.len();
        let sentences = {
            trace_stage!(STAGE_SELECT);
            self.selector.select(scored)
        };
        info!(
            total,
            eligible,
            selected = sentences.len(),
            percentage = self.config.percentage,
            "summary complete"
        );

        Ok(Summary {
            sentences,
            outcome: SummaryOutcome::Complete,
            total_sentences: total,
            eligible_sentences: eligible,
        })
    }

    /// Tokenize, filter and stem one sentence. Emphatic marks keep their
    /// surface form as stem.
    fn stem_sentence(&self, sentence: &String) -> Result<StemmedSentence> {
        let mut tokens = Vec::new();
        for token in self.tokenizer.tokenize(sentence) {
            if !is_content_token(&token, self.stopwords.as_ref()) {
                continue;
            }
            let stem = if is_emphatic(&token) {
                token.clone()
            } else {
                self.normalizer.normalize(&token)?
            };
            if !stem.is_empty() {
                tokens.push(StemmedToken::new(stem, token));
            }
        }
        Ok(StemmedSentence::new(tokens))
    }

    fn empty_vocabulary(&self, total: usize) -> Summary {
        let outcome = SummaryOutcome::EmptyVocabulary;
        warn!(sentences = total, "{}", outcome.message());
        Summary::empty(outcome, total)
    }
}

// ============================================================================
// SummarizerBuilder
// ============================================================================

/// Builder for a [`Summarizer`] with injected collaborators.
///
/// Unset collaborators fall back to the defaults for `config.language`. The
/// default stopword filter is case-sensitive, so a capitalized stopword at
/// the start of a sentence counts as a content word.
#[derive(Default)]
pub struct SummarizerBuilder {
    config: SummarizerConfig,
    segmenter: Option<Arc<dyn Segmenter>>,
    tokenizer: Option<Arc<dyn WordTokenizer>>,
    normalizer: Option<Arc<dyn Normalizer>>,
    stopwords: Option<Arc<dyn StopwordCheck>>,
    weighter: Option<TermWeighter>,
    detector: Option<Arc<dyn IndicatorDetector>>,
    tagger: Option<Arc<dyn PosTagger>>,
}

impl SummarizerBuilder {
    pub fn new(config: SummarizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn tokenizer(mut self, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn normalizer(mut self, normalizer: Arc<dyn Normalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn stopwords(mut self, stopwords: Arc<dyn StopwordCheck>) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn weighter(mut self, weighter: TermWeighter) -> Self {
        self.weighter = Some(weighter);
        self
    }

    /// Use this detector for indicator reweighting
    pub fn detector(mut self, detector: Arc<dyn IndicatorDetector>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Build a template detector from `config.template_dir` with this tagger
    /// instead of `config.lexicon`
    pub fn tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn build(self) -> Result<Summarizer> {
        self.config.validate()?;

        let language = self.config.language.as_str();
        let tokenizer = self
            .tokenizer
            .unwrap_or_else(|| Arc::new(RegexTokenizer::new()));
        let reweighter = Self::reweighter(&self.config, self.detector, self.tagger, &tokenizer)?;

        Ok(Summarizer {
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Arc::new(UnicodeSegmenter::new())),
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Arc::new(SnowballNormalizer::new(language))),
            stopwords: self
                .stopwords
                .unwrap_or_else(|| {
                    Arc::new(StopwordFilter::new(language).with_case_sensitive(true))
                }),
            weighter: self.weighter.unwrap_or_default(),
            selector: SentenceSelector::new(self.config.percentage),
            tokenizer,
            reweighter,
            config: self.config,
        })
    }

    fn reweighter(
        config: &SummarizerConfig,
        detector: Option<Arc<dyn IndicatorDetector>>,
        tagger: Option<Arc<dyn PosTagger>>,
        tokenizer: &Arc<dyn WordTokenizer>,
    ) -> Result<IndicatorReweighter> {
        if !config.indicators {
            return Ok(IndicatorReweighter::disabled());
        }
        if let Some(detector) = detector {
            return Ok(IndicatorReweighter::new(detector));
        }
        let tagger = match (tagger, config.lexicon.as_ref()) {
            (Some(tagger), _) => tagger,
            (None, Some(path)) => Arc::new(LexiconTagger::load(path)?) as Arc<dyn PosTagger>,
            (None, None) if config.template_dir.is_some() || config.use_template_set_variant => {
                return Err(SummarizerError::invalid_config(
                    "indicator templates need a tagger: set lexicon or inject one",
                ));
            }
            (None, None) => {
                debug!("no indicator detector or templates configured; indicators disabled");
                return Ok(IndicatorReweighter::disabled());
            }
        };
        let Some(dir) = config.template_dir.as_ref() else {
            return Err(SummarizerError::invalid_config(
                "a tagger or lexicon was supplied but template_dir is not set",
            ));
        };

        let templates = TemplateSet::load(dir, config.use_template_set_variant)?;
        info!(
            dir = %dir.display(),
            variant = config.use_template_set_variant,
            "indicator templates loaded"
        );
        let detector = TemplateIndicatorDetector::new(templates, tagger)
            .with_tokenizer(Arc::clone(tokenizer));
        Ok(IndicatorReweighter::new(Arc::new(detector)))
    }
}
