//! Stopword filtering
//!
//! Built-in lists come from the `stop-words` crate; custom lists can extend
//! or replace them.

use crate::pipeline::traits::StopwordCheck;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from sentences
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("ru")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::built_in_list(language).into_iter().collect(),
            case_sensitive: false,
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// The built-in stopword list for a language (Russian when unknown)
    pub fn built_in_list(language: &str) -> Vec<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            _ => LANGUAGE::Russian,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

impl StopwordCheck for StopwordFilter {
    fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_stopwords() {
        let filter = StopwordFilter::new("ru");

        assert!(filter.is_stopword("и"));
        assert!(filter.is_stopword("В")); // case insensitive
        assert!(filter.is_stopword("не"));
        assert!(!filter.is_stopword("война"));
        assert!(!filter.is_stopword("?"));
    }

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("и"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::from_list(&["the"]).with_case_sensitive(true);
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }
}
