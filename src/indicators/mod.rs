//! Rhetorical-aspect indicators
//!
//! An [`IndicatorDetector`] classifies a sentence against five aspect
//! categories. The best match of each aspect adds an increment to a
//! multiplier that starts at 1.0; see [`indicator_increment`].

pub mod lexicon;
pub mod reweighter;
pub mod template;

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use lexicon::LexiconTagger;
pub use reweighter::IndicatorReweighter;
pub use template::{PosTagger, TaggedWord, TemplateIndicatorDetector, TemplateSet};

/// Rhetorical aspect categories, in classification order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    Aim,
    Method,
    Problem,
    Relevance,
    Result,
}

impl Aspect {
    pub const ALL: [Aspect; 5] = [
        Aspect::Aim,
        Aspect::Method,
        Aspect::Problem,
        Aspect::Relevance,
        Aspect::Result,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Aspect::Aim => "Aim",
            Aspect::Method => "Method",
            Aspect::Problem => "Problem",
            Aspect::Relevance => "Relevance",
            Aspect::Result => "Result",
        }
    }

    /// Position in [`Aspect::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pattern match for an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectMatch {
    /// Length of the matched pattern
    pub pattern_length: usize,
    /// Number of words the match covers
    pub matched_word_count: usize,
}

impl AspectMatch {
    pub fn new(pattern_length: usize, matched_word_count: usize) -> Self {
        Self {
            pattern_length,
            matched_word_count,
        }
    }
}

/// Ranked matches (best first) for each of the five aspects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AspectMatches {
    matches: [Vec<AspectMatch>; 5],
}

impl AspectMatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ranked matches of one aspect
    pub fn set(&mut self, aspect: Aspect, ranked: Vec<AspectMatch>) {
        self.matches[aspect.index()] = ranked;
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, aspect: Aspect, ranked: Vec<AspectMatch>) -> Self {
        self.set(aspect, ranked);
        self
    }

    pub fn get(&self, aspect: Aspect) -> &[AspectMatch] {
        &self.matches[aspect.index()]
    }

    /// Highest-ranked match of an aspect, if any
    pub fn best(&self, aspect: Aspect) -> Option<&AspectMatch> {
        self.get(aspect).first()
    }
}

/// Classifies sentences against the rhetorical aspects
pub trait IndicatorDetector: Send + Sync {
    fn classify(&self, sentence: &str) -> Result<AspectMatches>;
}

/// Multiplier increment for one match.
///
/// | pattern length `L` | matched words `W` | increment |
/// |---|---|---|
/// | `L > 3` | `W ≥ 3` / `W = 2` / else | 1.0 / 0.5 / 0 |
/// | `L = 3` | `W ≥ 2` / `W = 1` / else | 1.0 / 0.5 / 0 |
/// | `L < 3` | `W ≥ L` / else | 1.0 / 0 |
pub fn indicator_increment(m: &AspectMatch) -> f64 {
    let (l, w) = (m.pattern_length, m.matched_word_count);
    match l {
        l if l > 3 => match w {
            w if w >= 3 => 1.0,
            2 => 0.5,
            _ => 0.0,
        },
        3 => match w {
            w if w >= 2 => 1.0,
            1 => 0.5,
            _ => 0.0,
        },
        l => {
            if w >= l {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// 1.0 plus the increment of each aspect's best match
pub fn indicator_multiplier(matches: &AspectMatches) -> f64 {
    1.0 + Aspect::ALL
        .iter()
        .filter_map(|aspect| matches.best(*aspect))
        .map(indicator_increment)
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_long_patterns() {
        assert_eq!(indicator_increment(&AspectMatch::new(5, 4)), 1.0);
        assert_eq!(indicator_increment(&AspectMatch::new(4, 3)), 1.0);
        assert_eq!(indicator_increment(&AspectMatch::new(4, 2)), 0.5);
        assert_eq!(indicator_increment(&AspectMatch::new(4, 1)), 0.0);
    }

    #[test]
    fn test_increment_length_three() {
        assert_eq!(indicator_increment(&AspectMatch::new(3, 3)), 1.0);
        assert_eq!(indicator_increment(&AspectMatch::new(3, 2)), 1.0);
        assert_eq!(indicator_increment(&AspectMatch::new(3, 1)), 0.5);
        assert_eq!(indicator_increment(&AspectMatch::new(3, 0)), 0.0);
    }

    #[test]
    fn test_increment_short_patterns() {
        assert_eq!(indicator_increment(&AspectMatch::new(2, 2)), 1.0);
        assert_eq!(indicator_increment(&AspectMatch::new(2, 1)), 0.0);
        assert_eq!(indicator_increment(&AspectMatch::new(1, 1)), 1.0);
        assert_eq!(indicator_increment(&AspectMatch::new(1, 0)), 0.0);
    }

    #[test]
    fn test_multiplier_uses_best_match_only() {
        let matches = AspectMatches::new()
            .with(
                Aspect::Aim,
                vec![AspectMatch::new(4, 2), AspectMatch::new(4, 5)],
            )
            .with(Aspect::Result, vec![AspectMatch::new(1, 1)]);

        // Aim best → 0.5, Result → 1.0
        assert!((indicator_multiplier(&matches) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_multiplier_without_matches() {
        assert_eq!(indicator_multiplier(&AspectMatches::new()), 1.0);
    }

    #[test]
    fn test_aspect_order() {
        let names: Vec<&str> = Aspect::ALL.iter().map(Aspect::as_str).collect();
        assert_eq!(names, vec!["Aim", "Method", "Problem", "Relevance", "Result"]);
        assert_eq!(Aspect::Relevance.index(), 3);
    }
}
