//! # rapid_summarize
//!
//! Extractive text summarization by sentence centrality.
//!
//! A document is split into sentences, each sentence is reduced to its
//! significant words, and every pair of sentences is compared with a
//! bag-of-words cosine similarity. Sentences with the highest total
//! similarity to the rest of the document form the summary, in their
//! original order.
//!
//! ## Features
//!
//! - **Deterministic**: identical input always yields byte-identical output
//! - **Unicode-aware**: UAX #29 sentence and word segmentation
//! - **Multi-language**: stop-word lists for 16 languages
//! - **Python bindings**: optional, via PyO3 (`python` feature)
//!
//! ```
//! let summary = rapid_summarize::summarize("A. B. C. D.", 2).unwrap();
//! assert_eq!(summary, "A. B.");
//! ```

pub mod boundary;
pub mod errors;
pub mod nlp;
pub mod ranking;
pub mod similarity;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{
    CentralityMethod, RankedSentence, Sentence, Summary, SummarizerConfig,
    DEFAULT_SENTENCE_COUNT,
};

// Re-export main functionality
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use ranking::{degree_scores, rank_by_score, PowerIteration};
pub use similarity::{build_similarity_matrix, sentence_similarity, SimilarityMatrix};
pub use summarizer::{context::SummarizerContext, summarize, Summarizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
