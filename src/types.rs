//! Core data types for rapid_summarize
//!
//! Sentences, configuration and summary results shared by every stage of the
//! summarization pipeline.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

/// Sentence count used when the caller does not supply a usable one
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// A sentence as it appears in the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text with original casing and punctuation (trimmed)
    pub text: String,
    /// Start byte offset in the original text
    pub start: usize,
    /// End byte offset in the original text (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }
}

/// How sentence centrality is computed from the similarity matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralityMethod {
    /// Row-sum of the similarity matrix (total similarity to every other sentence)
    #[default]
    Degree,
    /// Weighted PageRank over the similarity matrix, solved by power iteration
    PowerIteration,
}

impl std::str::FromStr for CentralityMethod {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "degree" => Ok(Self::Degree),
            "power_iteration" | "pagerank" => Ok(Self::PowerIteration),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown centrality method '{}'",
                other
            ))),
        }
    }
}

/// Configuration for a [`Summarizer`](crate::Summarizer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences to keep
    pub num_sentences: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Centrality scoring method
    pub centrality: CentralityMethod,
    /// Damping factor for power iteration
    pub damping: f64,
    /// Maximum iterations for power iteration
    pub max_iterations: usize,
    /// Convergence threshold for power iteration (L1 delta)
    pub convergence_threshold: f64,
    /// Build similarity matrix rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: DEFAULT_SENTENCE_COUNT,
            language: "en".to_string(),
            stopwords: Vec::new(),
            centrality: CentralityMethod::Degree,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
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
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_sentence_count(self.num_sentences)?;

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizeError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set number of sentences
    pub fn with_num_sentences(mut self, num_sentences: usize) -> Self {
        self.num_sentences = num_sentences;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set centrality method
    pub fn with_centrality(mut self, centrality: CentralityMethod) -> Self {
        self.centrality = centrality;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: enable parallel matrix construction
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Reject a sentence count that cannot produce a summary
pub(crate) fn validate_sentence_count(num_sentences: usize) -> Result<()> {
    if num_sentences == 0 {
        return Err(SummarizeError::invalid_config(
            "num_sentences must be a positive integer, got 0",
        ));
    }
    Ok(())
}

/// A sentence chosen for the summary, with its centrality score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    /// Index of the sentence in the document
    pub index: usize,
    /// Original sentence text
    pub text: String,
    /// Centrality score
    pub score: f64,
    /// 1-based rank among all sentences
    pub rank: usize,
}

/// Full result of a summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text
    pub text: String,
    /// Selected sentences in document order (empty when short-circuited)
    pub sentences: Vec<RankedSentence>,
    /// Centrality score of every sentence, indexed by sentence
    pub scores: Vec<f64>,
    /// Number of sentences found in the document
    pub total_sentences: usize,
    /// True when the document was returned unchanged
    pub short_circuited: bool,
}

impl Summary {
    /// Number of sentences in the summary
    pub fn len(&self) -> usize {
        if self.short_circuited {
            self.total_sentences
        } else {
            self.sentences.len()
        }
    }

    /// Whether the summary contains no sentences
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
