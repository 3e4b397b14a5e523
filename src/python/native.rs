//! Native Python interface
//!
//! Template indicators are enabled with `indicators=True` plus a
//! `template_dir` and a tagging `lexicon` file. Passing template settings
//! without a lexicon raises `ValueError`.

use crate::pipeline::runner::Summarizer;
use crate::types::{ScoredSentence, SummarizerConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::PathBuf;

/// A selected sentence with its score and document position
#[pyclass(name = "ScoredSentence")]
#[derive(Clone)]
pub struct PyScoredSentence {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub index: usize,
}

#[pymethods]
impl PyScoredSentence {
    fn __repr__(&self) -> String {
        format!(
            "ScoredSentence(index={}, score={:.4}, text='{}')",
            self.index, self.score, self.text
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<ScoredSentence> for PyScoredSentence {
    fn from(s: ScoredSentence) -> Self {
        Self {
            text: s.text,
            score: s.score,
            index: s.index,
        }
    }
}

fn build_config(
    percentage: u32,
    indicators: bool,
    language: &str,
    template_dir: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    template_variant: bool,
) -> SummarizerConfig {
    let mut config = SummarizerConfig::default()
        .with_percentage(percentage)
        .with_indicators(indicators)
        .with_language(language)
        .with_template_set_variant(template_variant);
    config.template_dir = template_dir;
    config.lexicon = lexicon;
    config
}

fn run(py: Python<'_>, text: &str, config: SummarizerConfig) -> PyResult<Vec<ScoredSentence>> {
    let summarizer =
        Summarizer::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;

    let summary = py
        .allow_threads(|| summarizer.summarize(text))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(summary.sentences)
}

/// Summarize text, returning the selected sentences in document order
#[pyfunction]
#[pyo3(signature = (
    text,
    percentage = 10,
    indicators = false,
    language = "ru",
    template_dir = None,
    lexicon = None,
    template_variant = false
))]
#[allow(clippy::too_many_arguments)]
pub fn summarize(
    py: Python<'_>,
    text: &str,
    percentage: u32,
    indicators: bool,
    language: &str,
    template_dir: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    template_variant: bool,
) -> PyResult<Vec<String>> {
    let config = build_config(
        percentage,
        indicators,
        language,
        template_dir,
        lexicon,
        template_variant,
    );
    Ok(run(py, text, config)?
        .into_iter()
        .map(|s| s.text)
        .collect())
}

/// Like `summarize`, keeping scores and sentence indices
#[pyfunction]
#[pyo3(signature = (
    text,
    percentage = 10,
    indicators = false,
    language = "ru",
    template_dir = None,
    lexicon = None,
    template_variant = false
))]
#[allow(clippy::too_many_arguments)]
pub fn summarize_scored(
    py: Python<'_>,
    text: &str,
    percentage: u32,
    indicators: bool,
    language: &str,
    template_dir: Option<PathBuf>,
    lexicon: Option<PathBuf>,
    template_variant: bool,
) -> PyResult<Vec<PyScoredSentence>> {
    let config = build_config(
        percentage,
        indicators,
        language,
        template_dir,
        lexicon,
        template_variant,
    );
    Ok(run(py, text, config)?
        .into_iter()
        .map(PyScoredSentence::from)
        .collect())
}
