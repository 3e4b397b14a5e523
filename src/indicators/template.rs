//! Pattern-template indicator detector
//!
//! Templates are written against a tagged rendering of the sentence, where
//! every word becomes `Tag<normal>` and words are concatenated:
//! `N<цель>V<являться>A<новый>`.
//!
//! # Template format
//!
//! One definition per line: `Name = alternative | alternative ...`. An
//! alternative is a whitespace-separated sequence of parts:
//!
//! - `Tag<word>`: a literal tagged word (`Tag<\w*>` matches any word);
//! - `Name`: a mandatory reference to an earlier definition;
//! - `[Name]`: an optional reference.
//!
//! The part-of-speech groups `A Ap Av Cn Int N Num Pa Pn Pr Pt V` are
//! predefined and match any word with that tag. Definitions whose name
//! contains `Dict` or `Pos` are plain word groups; every other definition is a
//! pattern and becomes a named capture group. The definition named after the
//! aspect (`Aim`, `Method`, ...) is the entry point.
//!
//! A pattern's length is one plus the number of `?` in its compiled regex.
//! Referenced patterns count through their own groups, so every optional part
//! and every named group pulled in by a reference adds to it.

use super::{Aspect, AspectMatch, AspectMatches, IndicatorDetector};
use crate::errors::{Result, SummarizerError};
use crate::nlp::tokenizer::RegexTokenizer;
use crate::pipeline::traits::WordTokenizer;
use lazy_static::lazy_static;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Predefined part-of-speech groups
pub const POS_GROUPS: [&str; 12] = [
    "A", "Ap", "Av", "Cn", "Int", "N", "Num", "Pa", "Pn", "Pr", "Pt", "V",
];

lazy_static! {
    static ref TAGGED_WORD: Regex = Regex::new(r"\w*<\w*>").expect("valid regex");
    static ref OPTIONAL_REF: Regex = Regex::new(r"^\[(\w*)\]").expect("valid regex");
}

// ============================================================================
// Tagging
// ============================================================================

/// A word's short part-of-speech tag and normal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub tag: String,
    pub normal: String,
}

impl TaggedWord {
    pub fn new(tag: impl Into<String>, normal: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            normal: normal.into(),
        }
    }
}

/// Assigns a short tag and normal form to a token; `None` skips the token
pub trait PosTagger: Send + Sync {
    fn tag(&self, token: &str) -> Option<TaggedWord>;
}

impl<F> PosTagger for F
where
    F: Fn(&str) -> Option<TaggedWord> + Send + Sync,
{
    fn tag(&self, token: &str) -> Option<TaggedWord> {
        self(token)
    }
}

/// Map an OpenCorpora part-of-speech tag to the template tag set
pub fn short_tag(opencorpora: &str) -> Option<&'static str> {
    let tag = match opencorpora {
        "NOUN" => "N",
        "ADJF" | "ADJS" | "COMP" => "A",
        "VERB" | "INFN" => "V",
        "PRTF" | "PRTS" => "Pa",
        "GRND" => "Ap",
        "NUMR" => "Num",
        "ADVB" | "PRED" => "Av",
        "NPRO" => "Pn",
        "PREP" => "Pr",
        "CONJ" => "Cn",
        "PRCL" => "Pt",
        "INTJ" => "Int",
        _ => return None,
    };
    Some(tag)
}

// ============================================================================
// Aspect template
// ============================================================================

/// A compiled template for one aspect
#[derive(Debug, Clone)]
pub struct AspectTemplate {
    aspect: Aspect,
    regex: Regex,
    pattern_lengths: FxHashMap<String, usize>,
}

impl AspectTemplate {
    /// Parse and compile a template definition file
    pub fn parse(aspect: Aspect, source: &str) -> Result<Self> {
        let err = |message: String| SummarizerError::template(aspect.as_str(), message);

        let mut definitions: FxHashMap<String, String> = POS_GROUPS
            .iter()
            .map(|g| (g.to_string(), format!(r"{}<\w*>", g)))
            .collect();
        let mut pattern_lengths: FxHashMap<String, usize> = FxHashMap::default();

        for (line_no, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (left, right) = line
                .split_once('=')
                .ok_or_else(|| err(format!("line {}: missing '='", line_no + 1)))?;
            let name = left.trim();
            if name.is_empty() {
                return Err(err(format!("line {}: empty definition name", line_no + 1)));
            }

            let mut alternatives = Vec::new();
            for alternative in right.split('|') {
                let mut body = String::new();
                for part in alternative.split_whitespace() {
                    let compiled = Self::prepare(&definitions, part)
                        .map_err(|m| err(format!("line {}: {}", line_no + 1, m)))?;
                    body.push_str(&compiled);
                }
                alternatives.push(body);
            }
            let result = alternatives.join("|");

            if name.contains("Dict") || name.contains("Pos") {
                definitions.insert(name.to_string(), result);
            } else {
                if !result.starts_with("(?") {
                    pattern_lengths.insert(name.to_string(), result.matches('?').count() + 1);
                }
                definitions.insert(name.to_string(), format!("(?P<{}>{})", name, result));
            }
        }

        let entry = definitions
            .get(aspect.as_str())
            .ok_or_else(|| err(format!("no '{}' definition", aspect)))?;
        let regex = Regex::new(entry).map_err(|e| err(e.to_string()))?;

        Ok(Self {
            aspect,
            regex,
            pattern_lengths,
        })
    }

    /// Compile one part: a reference becomes a group, anything else is kept
    /// as written
    fn prepare(
        definitions: &FxHashMap<String, String>,
        part: &str,
    ) -> std::result::Result<String, String> {
        if let Some(caps) = OPTIONAL_REF.captures(part) {
            let name = &caps[1];
            return definitions
                .get(name)
                .map(|s| format!("({})?", s))
                .ok_or_else(|| format!("undefined reference [{}]", name));
        }
        Ok(match definitions.get(part) {
            Some(s) => format!("({})", s),
            None => part.to_string(),
        })
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Ranked matches in a tagged sentence, most matched words first
    pub fn analyze(&self, tagged: &str) -> Vec<AspectMatch> {
        let names: Vec<Option<&str>> = self.regex.capture_names().collect();
        let mut matches: Vec<(usize, AspectMatch)> = Vec::new();

        for caps in self.regex.captures_iter(tagged) {
            let mut entries: Vec<AspectMatch> = Vec::new();
            for (i, name) in names.iter().enumerate() {
                let (Some(name), Some(m)) = (name, caps.get(i)) else {
                    continue;
                };
                let length = if *name == self.aspect.as_str() {
                    1
                } else {
                    self.pattern_lengths.get(*name).copied().unwrap_or(1)
                };
                entries.push(AspectMatch::new(length, word_count(m.as_str())));
            }

            let Some(best_words) = entries.iter().map(|e| e.matched_word_count).max() else {
                continue;
            };
            if best_words == 0 {
                continue;
            }
            // The first entry is the aspect group itself; the next one is the
            // pattern that matched.
            let chosen = entries.get(1).or_else(|| entries.first()).copied();
            if let Some(chosen) = chosen {
                matches.push((best_words, chosen));
            }
        }

        matches.sort_by(|a, b| b.0.cmp(&a.0));
        matches.into_iter().map(|(_, m)| m).collect()
    }
}

fn word_count(fragment: &str) -> usize {
    TAGGED_WORD.find_iter(fragment).count()
}

// ============================================================================
// Template set
// ============================================================================

/// Templates for all five aspects
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<AspectTemplate>,
}

impl TemplateSet {
    /// Compile a template set from per-aspect sources, in [`Aspect::ALL`] order
    pub fn from_sources(sources: [&str; 5]) -> Result<Self> {
        let templates = Aspect::ALL
            .iter()
            .zip(sources)
            .map(|(aspect, source)| AspectTemplate::parse(*aspect, source))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { templates })
    }

    /// Path of one aspect's template file inside `dir`
    pub fn template_path(dir: &Path, aspect: Aspect, variant: bool) -> PathBuf {
        let name = aspect.as_str().to_lowercase();
        if variant {
            dir.join("templates_2").join(format!("{}_all_patterns_a", name))
        } else {
            dir.join("templates_1").join(format!("{}_all_patterns", name))
        }
    }

    /// Load the primary or the variant collection from `dir`
    pub fn load(dir: impl AsRef<Path>, variant: bool) -> Result<Self> {
        let dir = dir.as_ref();
        let templates = Aspect::ALL
            .iter()
            .map(|aspect| {
                let path = Self::template_path(dir, *aspect, variant);
                let source = std::fs::read_to_string(&path).map_err(|e| {
                    SummarizerError::template(
                        aspect.as_str(),
                        format!("cannot read {}: {}", path.display(), e),
                    )
                })?;
                AspectTemplate::parse(*aspect, &source)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { templates })
    }

    /// Match every aspect against a tagged sentence
    pub fn analyze(&self, tagged: &str) -> AspectMatches {
        let mut matches = AspectMatches::new();
        for template in &self.templates {
            matches.set(template.aspect(), template.analyze(tagged));
        }
        matches
    }
}

// ============================================================================
// Detector
// ============================================================================

/// [`IndicatorDetector`] backed by a [`TemplateSet`] and a [`PosTagger`]
#[derive(Clone)]
pub struct TemplateIndicatorDetector {
    templates: TemplateSet,
    tagger: Arc<dyn PosTagger>,
    tokenizer: Arc<dyn WordTokenizer>,
}

impl std::fmt::Debug for TemplateIndicatorDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateIndicatorDetector")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

impl TemplateIndicatorDetector {
    pub fn new(templates: TemplateSet, tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            templates,
            tagger,
            tokenizer: Arc::new(RegexTokenizer::new()),
        }
    }

    /// Use a different word tokenizer for rendering sentences
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Render a sentence as `Tag<normal>` words; untagged tokens are skipped
    pub fn render(&self, sentence: &str) -> String {
        self.tokenizer
            .tokenize(sentence)
            .iter()
            .filter_map(|token| self.tagger.tag(token))
            .map(|w| format!("{}<{}>", w.tag, w.normal))
            .collect()
    }
}

impl IndicatorDetector for TemplateIndicatorDetector {
    fn classify(&self, sentence: &str) -> Result<AspectMatches> {
        Ok(self.templates.analyze(&self.render(sentence)))
    }
}
