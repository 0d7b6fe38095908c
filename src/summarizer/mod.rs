//! Extractive summarization
//!
//! [`Summarizer`] runs the full pipeline: segment and clean the document,
//! build the similarity matrix, score sentence centrality, then keep the
//! top-K sentences in document order.
//!
//! ```
//! use rapid_summarize::{Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::new(SummarizerConfig::default()).unwrap();
//! let summary = summarizer.summarize("A. B. C. D.", 2).unwrap();
//! assert_eq!(summary, "A. B.");
//! ```

pub mod context;
pub mod selector;

use crate::errors::{Result, SummarizeError};
use crate::ranking::{degree_scores, rank_by_score, PowerIteration};
use crate::similarity::{build_similarity_matrix, build_similarity_matrix_parallel, SimilarityMatrix};
use crate::types::{
    validate_sentence_count, CentralityMethod, RankedSentence, Summary, SummarizerConfig,
};
use context::SummarizerContext;
use rayon::prelude::*;
use selector::{join_selected, select_indices};
use std::sync::Arc;

/// Enter a tracing span for a summarization stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Sentence-centrality summarizer
///
/// Holds a validated config and a shared, read-only [`SummarizerContext`].
/// Cloning is cheap and clones share the context.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    context: Arc<SummarizerContext>,
}

impl Summarizer {
    /// Validate the config and load its language resources
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let context = SummarizerContext::new(&config)?;
        Ok(Self {
            config,
            context: Arc::new(context),
        })
    }

    /// Create a summarizer over an existing shared context
    pub fn with_context(config: SummarizerConfig, context: Arc<SummarizerContext>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, context })
    }

    /// The summarizer's configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// The shared resource context
    pub fn context(&self) -> &Arc<SummarizerContext> {
        &self.context
    }

    /// Summarize `text` down to at most `num_sentences` sentences
    pub fn summarize(&self, text: &str, num_sentences: usize) -> Result<String> {
        self.summarize_detailed(text, num_sentences)
            .map(|summary| summary.text)
    }

    /// Summarize using the configured sentence count
    pub fn summarize_default(&self, text: &str) -> Result<String> {
        self.summarize(text, self.config.num_sentences)
    }

    /// Summarize and return scores and the selected sentences
    pub fn summarize_detailed(&self, text: &str, num_sentences: usize) -> Result<Summary> {
        let result = self.run(text, num_sentences);

        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::warn!(error = %err, "summarization failed");
        }

        result
    }

    /// Summarize many documents in parallel, one result per document
    pub fn summarize_batch<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        num_sentences: usize,
    ) -> Vec<Result<String>> {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref(), num_sentences))
            .collect()
    }

    fn run(&self, text: &str, num_sentences: usize) -> Result<Summary> {
        if text.trim().is_empty() {
            return Err(SummarizeError::invalid_input("empty text provided"));
        }
        validate_sentence_count(num_sentences)?;

        let pre = {
            trace_stage!("segment");
            self.context.preprocess(text)
        };
        let total = pre.len();

        if total <= num_sentences {
            return Ok(Summary {
                text: text.to_string(),
                sentences: Vec::new(),
                scores: Vec::new(),
                total_sentences: total,
                short_circuited: true,
            });
        }

        let matrix = {
            trace_stage!("matrix");
            if self.config.parallel {
                build_similarity_matrix_parallel(&pre.cleaned)
            } else {
                build_similarity_matrix(&pre.cleaned)
            }
        };

        let (scores, ranking) = {
            trace_stage!("rank");
            let scores = self.centrality(&matrix)?;
            let ranking = rank_by_score(&scores);
            (scores, ranking)
        };

        trace_stage!("select");
        let selected = select_indices(&ranking, num_sentences.min(total));
        let text = join_selected(&pre.sentences, &selected);

        let mut ranks = vec![0; total];
        for (position, &index) in ranking.iter().enumerate() {
            ranks[index] = position + 1;
        }
        let sentences = selected
            .iter()
            .map(|&i| RankedSentence {
                index: i,
                text: pre.sentences[i].text.clone(),
                score: scores[i],
                rank: ranks[i],
            })
            .collect();

        Ok(Summary {
            text,
            sentences,
            scores,
            total_sentences: total,
            short_circuited: false,
        })
    }

    fn centrality(&self, matrix: &SimilarityMatrix) -> Result<Vec<f64>> {
        match self.config.centrality {
            CentralityMethod::Degree => Ok(degree_scores(matrix)),
            CentralityMethod::PowerIteration => {
                let result = PowerIteration::from_config(&self.config)?.run(matrix);

                #[cfg(feature = "tracing")]
                if !result.converged {
                    tracing::debug!(
                        iterations = result.iterations,
                        delta = result.delta,
                        "power iteration did not converge"
                    );
                }

                Ok(result.scores)
            }
        }
    }
}

/// Summarize English text with the default configuration
pub fn summarize(text: &str, num_sentences: usize) -> Result<String> {
    Summarizer::new(SummarizerConfig::default())?.summarize(text, num_sentences)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Rust compilers guarantee memory safety. \
        The borrow checker gives Rust its memory safety. \
        Gardening requires patience. \
        Memory safety without garbage collection makes Rust compilers unique. \
        Tomatoes grow in sunny gardens.";

    fn summarizer() -> Summarizer {
        Summarizer::new(SummarizerConfig::default()).unwrap()
    }

    #[test]
    fn test_single_letter_sentences() {
        assert_eq!(summarizer().summarize("A. B. C. D.", 2).unwrap(), "A. B.");
    }

    #[test]
    fn test_empty_text_is_invalid_input() {
        let err = summarizer().summarize("", 3).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput { .. }));

        let err = summarizer().summarize(" \n\t ", 3).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_zero_sentences_is_invalid_config() {
        let err = summarizer().summarize("Some text.", 0).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_short_document_returned_unchanged() {
        let text = "  Only one sentence here.  ";
        let summary = summarizer().summarize_detailed(text, 3).unwrap();

        assert!(summary.short_circuited);
        assert_eq!(summary.text, text);
        assert_eq!(summary.total_sentences, 1);
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_exact_count_returned_unchanged() {
        let text = "One. Two. Three.";
        assert_eq!(summarizer().summarize(text, 3).unwrap(), text);
    }

    #[test]
    fn test_central_sentences_selected_in_order() {
        let summary = summarizer().summarize_detailed(ARTICLE, 2).unwrap();

        assert!(!summary.short_circuited);
        assert_eq!(summary.total_sentences, 5);
        assert_eq!(summary.sentences.len(), 2);
        assert!(summary.sentences[0].index < summary.sentences[1].index);
        assert!(summary
            .sentences
            .iter()
            .all(|s| s.text.contains("Rust")));
        assert!(!summary.text.contains("Gardening"));
    }

    #[test]
    fn test_detailed_ranks_and_scores() {
        let summary = summarizer().summarize_detailed(ARTICLE, 2).unwrap();

        assert_eq!(summary.scores.len(), 5);
        let mut ranks: Vec<_> = summary.sentences.iter().map(|s| s.rank).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![1, 2]);
        for s in &summary.sentences {
            assert_eq!(s.score, summary.scores[s.index]);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel =
            Summarizer::new(SummarizerConfig::default().with_parallel(true)).unwrap();

        assert_eq!(
            parallel.summarize(ARTICLE, 2).unwrap(),
            summarizer().summarize(ARTICLE, 2).unwrap()
        );
    }

    #[test]
    fn test_power_iteration_centrality() {
        let config = SummarizerConfig::default().with_centrality(CentralityMethod::PowerIteration);
        let summary = Summarizer::new(config)
            .unwrap()
            .summarize_detailed(ARTICLE, 2)
            .unwrap();

        assert_eq!(summary.sentences.len(), 2);
        let total: f64 = summary.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_default_uses_config_count() {
        let s = Summarizer::new(SummarizerConfig::default().with_num_sentences(1)).unwrap();
        assert_eq!(s.summarize_default("A. B. C.").unwrap(), "A.");
    }

    #[test]
    fn test_batch() {
        let results = summarizer().summarize_batch(&["A. B. C. D.", "", ARTICLE], 2);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref().unwrap(), "A. B.");
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_shared_context() {
        let base = summarizer();
        let other = Summarizer::with_context(
            SummarizerConfig::default().with_num_sentences(1),
            Arc::clone(base.context()),
        )
        .unwrap();

        assert!(Arc::ptr_eq(base.context(), other.context()));
        assert_eq!(other.summarize_default("A. B.").unwrap(), "A.");
    }

    #[test]
    fn test_free_function() {
        assert_eq!(summarize("A. B. C. D.", 2).unwrap(), "A. B.");
    }
}
