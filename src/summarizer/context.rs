//! Shared normalization resources
//!
//! A [`SummarizerContext`] is built once, up front, and then only read. It is
//! `Send + Sync`, so one context can back any number of concurrent calls.

use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Preprocessed, Tokenizer};
use crate::types::SummarizerConfig;

/// Tokenizer and stop-word set for one language
#[derive(Debug, Clone)]
pub struct SummarizerContext {
    language: String,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl SummarizerContext {
    /// Load the resources for the configured language
    ///
    /// Fails with `ResourceUnavailable` when no stop-word list exists for it.
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        let mut stopwords = StopwordFilter::new(&config.language)?;
        stopwords.add_stopwords(config.stopwords.as_slice());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            language = %config.language,
            stopwords = stopwords.len(),
            "loaded summarizer resources"
        );

        Ok(Self::with_stopwords(config.language.clone(), stopwords))
    }

    /// Build a context around an already-loaded stop-word set
    pub fn with_stopwords(language: impl Into<String>, stopwords: StopwordFilter) -> Self {
        Self {
            language: language.into(),
            tokenizer: Tokenizer::new(),
            stopwords,
        }
    }

    /// Language the resources were loaded for
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The stop-word set
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// The tokenizer
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Segment and clean a document
    pub fn preprocess(&self, text: &str) -> Preprocessed {
        self.tokenizer.preprocess(text, &self.stopwords)
    }
}
