//! Dictionary-backed part-of-speech tagger
//!
//! A lexicon is a UTF-8 text file with one word form per line:
//!
//! ```text
//! задачей	NOUN,inan,femn sing,ablt	задача
//! является	VERB,impf,intr sing,3per,pres,indc	являться
//! ```
//!
//! Columns are tab-separated: the surface form, an OpenCorpora tag whose first
//! grammeme is the part of speech, and the normal form. A missing normal form
//! defaults to the surface form. Blank lines and lines starting with `#` are
//! ignored. Forms whose part of speech has no template tag (punctuation,
//! Latin words, ...) are dropped, so the detector skips them like any unknown
//! word.

use super::template::{short_tag, PosTagger, TaggedWord};
use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// [`PosTagger`] that looks tokens up in a word-form lexicon
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    entries: FxHashMap<String, TaggedWord>,
}

impl LexiconTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a lexicon file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| SummarizerError::io(format!("{}: {}", path.display(), e)))?;
        let tagger = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), entries = tagger.len(), "lexicon loaded");
        Ok(tagger)
    }

    /// Parse lexicon lines from a reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut tagger = Self::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t').map(str::trim);
            let (Some(word), Some(tag)) = (columns.next(), columns.next()) else {
                return Err(SummarizerError::collaborator(
                    "lexicon",
                    format!("line {}: expected word<TAB>tag[<TAB>normal]", line_no + 1),
                ));
            };
            if word.is_empty() || tag.is_empty() {
                return Err(SummarizerError::collaborator(
                    "lexicon",
                    format!("line {}: empty word or tag", line_no + 1),
                ));
            }
            let normal = columns.next().filter(|n| !n.is_empty()).unwrap_or(word);

            let pos = tag.split([',', ' ']).next().unwrap_or(tag);
            if let Some(short) = short_tag(pos) {
                tagger.insert(word, TaggedWord::new(short, normal.to_lowercase()));
            }
        }
        Ok(tagger)
    }

    /// Add or replace one word form; lookups are case-insensitive
    pub fn insert(&mut self, word: &str, tagged: TaggedWord) {
        self.entries.insert(word.to_lowercase(), tagged);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, token: &str) -> Option<TaggedWord> {
        self.entries.get(&token.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "\
# surface\ttag\tnormal
Задачей\tNOUN,inan,femn sing,ablt\tзадача
является\tVERB,impf,intr sing,3per,pres,indc\tявляться
новый\tADJF,Qual masc,sing,nomn
,\tPNCT\t,
";

    #[test]
    fn test_parse_maps_opencorpora_tags() {
        let tagger = LexiconTagger::from_reader(LEXICON.as_bytes()).unwrap();

        assert_eq!(tagger.len(), 3);
        assert_eq!(tagger.tag("задачей"), Some(TaggedWord::new("N", "задача")));
        assert_eq!(tagger.tag("Является"), Some(TaggedWord::new("V", "являться")));
        // Normal form defaults to the surface form
        assert_eq!(tagger.tag("новый"), Some(TaggedWord::new("A", "новый")));
        assert_eq!(tagger.tag(","), None);
        assert_eq!(tagger.tag("метод"), None);
    }

    #[test]
    fn test_malformed_line_is_error() {
        let err = LexiconTagger::from_reader("цель NOUN цель\n".as_bytes()).unwrap_err();
        assert!(err.is_collaborator_failure());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LexiconTagger::load("/nonexistent/lexicon.tsv").unwrap_err();
        assert!(matches!(err, SummarizerError::Io { .. }));
    }
}
