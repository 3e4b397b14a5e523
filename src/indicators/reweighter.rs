//! Eligibility filter and indicator reweighting
//!
//! Only sentences with more than [`MIN_ELIGIBLE_STEMS`] distinct stems are
//! kept for selection; the rest are dropped, not scored at zero.

use super::{indicator_multiplier, IndicatorDetector};
use crate::errors::Result;
use crate::types::{ScoredSentence, SentenceTermFrequency};
use std::sync::Arc;
use tracing::trace;

/// A sentence needs strictly more distinct stems than this to be eligible
pub const MIN_ELIGIBLE_STEMS: usize = 6;

/// Whether a sentence can take part in the final selection
#[inline]
pub fn is_eligible(sentence: &SentenceTermFrequency) -> bool {
    sentence.distinct_stems() > MIN_ELIGIBLE_STEMS
}

/// Applies the eligibility filter and, when a detector is set, the
/// rhetorical-indicator multiplier
#[derive(Clone, Default)]
pub struct IndicatorReweighter {
    detector: Option<Arc<dyn IndicatorDetector>>,
}

impl std::fmt::Debug for IndicatorReweighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorReweighter")
            .field("enabled", &self.detector.is_some())
            .finish()
    }
}

impl IndicatorReweighter {
    /// Reweighter using `detector`
    pub fn new(detector: Arc<dyn IndicatorDetector>) -> Self {
        Self {
            detector: Some(detector),
        }
    }

    /// Reweighter that only filters
    pub fn disabled() -> Self {
        Self { detector: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.detector.is_some()
    }

    /// Multiplier for one sentence text (1.0 when disabled)
    pub fn multiplier(&self, text: &str) -> Result<f64> {
        match &self.detector {
            Some(detector) => Ok(indicator_multiplier(&detector.classify(text)?)),
            None => Ok(1.0),
        }
    }

    /// Eligible sentences with their final scores, in document order.
    ///
    /// `texts`, `frequencies` and `scores` are parallel by sentence index.
    pub fn reweight<S: AsRef<str>>(
        &self,
        texts: &[S],
        frequencies: &[SentenceTermFrequency],
        scores: &[f64],
    ) -> Result<Vec<ScoredSentence>> {
        debug_assert_eq!(texts.len(), frequencies.len());
        debug_assert_eq!(texts.len(), scores.len());

        let mut result = Vec::new();
        for (index, ((text, frequency), &score)) in
            texts.iter().zip(frequencies).zip(scores).enumerate()
        {
            if !is_eligible(frequency) {
                continue;
            }
            let multiplier = self.multiplier(text.as_ref())?;
            trace!(index, score, multiplier, "sentence reweighted");
            result.push(ScoredSentence::new(text.as_ref(), score * multiplier, index));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizerError;
    use crate::indicators::{Aspect, AspectMatch, AspectMatches};

    fn tf(n: usize) -> SentenceTermFrequency {
        SentenceTermFrequency::from_counts((0..n).map(|i| (format!("s{}", i), 1)))
    }

    struct KeywordDetector;

    impl IndicatorDetector for KeywordDetector {
        fn classify(&self, sentence: &str) -> Result<AspectMatches> {
            let mut matches = AspectMatches::new();
            if sentence.contains("цель") {
                matches.set(Aspect::Aim, vec![AspectMatch::new(3, 2)]);
            }
            if sentence.contains("результат") {
                matches.set(Aspect::Result, vec![AspectMatch::new(4, 2)]);
            }
            Ok(matches)
        }
    }

    struct FailingDetector;

    impl IndicatorDetector for FailingDetector {
        fn classify(&self, _sentence: &str) -> Result<AspectMatches> {
            Err(SummarizerError::collaborator("indicator detector", "boom"))
        }
    }

    #[test]
    fn test_eligibility_threshold() {
        assert!(!is_eligible(&tf(6)));
        assert!(is_eligible(&tf(7)));
    }

    #[test]
    fn test_ineligible_dropped_indices_kept() {
        let texts = ["a", "b", "c"];
        let freqs = vec![tf(7), tf(3), tf(8)];
        let scored = IndicatorReweighter::disabled()
            .reweight(&texts, &freqs, &[1.0, 2.0, 3.0])
            .unwrap();

        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].index, 0);
        assert_eq!(scored[1].index, 2);
        assert_eq!(scored[1].score, 3.0);
    }

    #[test]
    fn test_multiplier_applied() {
        let texts = ["цель и результат", "ничего", "только цель"];
        let freqs = vec![tf(7), tf(7), tf(7)];
        let reweighter = IndicatorReweighter::new(Arc::new(KeywordDetector));
        let scored = reweighter.reweight(&texts, &freqs, &[2.0, 2.0, 2.0]).unwrap();

        // 1 + 1.0 (Aim, L=3 W=2) + 0.5 (Result, L=4 W=2)
        assert!((scored[0].score - 5.0).abs() < 1e-12);
        assert!((scored[1].score - 2.0).abs() < 1e-12);
        assert!((scored[2].score - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_detector_failure_propagates() {
        let reweighter = IndicatorReweighter::new(Arc::new(FailingDetector));
        let result = reweighter.reweight(&["x"], &[tf(7)], &[1.0]);
        assert!(result.unwrap_err().is_collaborator_failure());
    }

    #[test]
    fn test_detector_not_consulted_for_ineligible() {
        let reweighter = IndicatorReweighter::new(Arc::new(FailingDetector));
        let result = reweighter.reweight(&["x"], &[tf(2)], &[1.0]).unwrap();
        assert!(result.is_empty());
    }
}
