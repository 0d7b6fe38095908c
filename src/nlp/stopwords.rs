//! Stopword filtering
//!
//! Stop-word sets come from the `stop-words` crate and are loaded once per
//! [`StopwordFilter`]. An unsupported language is a resource failure, not a
//! silent fallback to English.

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A fixed set of lower-case stopwords for one language
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Load the stopword list for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn new(language: &str) -> Result<Self> {
        let lang = Self::resolve_language(language).ok_or_else(|| {
            SummarizeError::resource_unavailable(format!(
                "no stop-word list available for language '{}'",
                language
            ))
        })?;

        let stopwords: FxHashSet<String> = get(lang).iter().map(|s| s.to_lowercase()).collect();
        if stopwords.is_empty() {
            return Err(SummarizeError::resource_unavailable(format!(
                "stop-word list for language '{}' is empty",
                language
            )));
        }

        Ok(Self { stopwords })
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn resolve_language(language: &str) -> Option<LANGUAGE> {
        let lang = match language.trim().to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}
