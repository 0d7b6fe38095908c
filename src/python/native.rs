//! Native Python interface
//!
//! Python classes wrapping [`Summarizer`]. Input and configuration errors
//! raise `ValueError`; missing language resources raise `RuntimeError`.

use crate::errors::SummarizeError;
use crate::summarizer::Summarizer;
use crate::types::{CentralityMethod, RankedSentence, Summary, SummarizerConfig};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(err: SummarizeError) -> PyErr {
    match err {
        SummarizeError::ResourceUnavailable { .. } => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python ints may be negative; those are configuration errors here
fn sentence_count(num_sentences: i64) -> PyResult<usize> {
    usize::try_from(num_sentences).map_err(|_| {
        to_py_err(SummarizeError::invalid_config(format!(
            "num_sentences must be a positive integer, got {}",
            num_sentences
        )))
    })
}

/// A sentence selected for a summary
#[pyclass(name = "RankedSentence")]
#[derive(Clone)]
pub struct PyRankedSentence {
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub rank: usize,
}

#[pymethods]
impl PyRankedSentence {
    fn __repr__(&self) -> String {
        format!(
            "RankedSentence(index={}, score={:.4}, rank={})",
            self.index, self.score, self.rank
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<RankedSentence> for PyRankedSentence {
    fn from(s: RankedSentence) -> Self {
        Self {
            index: s.index,
            text: s.text,
            score: s.score,
            rank: s.rank,
        }
    }
}

/// Result of a detailed summarization
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub sentences: Vec<PyRankedSentence>,
    #[pyo3(get)]
    pub scores: Vec<f64>,
    #[pyo3(get)]
    pub total_sentences: usize,
    #[pyo3(get)]
    pub short_circuited: bool,
}

#[pymethods]
impl PySummary {
    fn __repr__(&self) -> String {
        format!(
            "Summary(sentences={}, total_sentences={}, short_circuited={})",
            self.sentences.len(),
            self.total_sentences,
            self.short_circuited
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<Summary> for PySummary {
    fn from(s: Summary) -> Self {
        Self {
            text: s.text,
            sentences: s.sentences.into_iter().map(Into::into).collect(),
            scores: s.scores,
            total_sentences: s.total_sentences,
            short_circuited: s.short_circuited,
        }
    }
}

/// Sentence-centrality summarizer
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (
        num_sentences=3,
        language="en",
        stopwords=None,
        centrality="degree",
        damping=0.85,
        max_iterations=100,
        convergence_threshold=1e-6,
        parallel=false
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        num_sentences: i64,
        language: &str,
        stopwords: Option<Vec<String>>,
        centrality: &str,
        damping: f64,
        max_iterations: usize,
        convergence_threshold: f64,
        parallel: bool,
    ) -> PyResult<Self> {
        let centrality: CentralityMethod = centrality.parse().map_err(to_py_err)?;

        let config = SummarizerConfig::new()
            .with_num_sentences(sentence_count(num_sentences)?)
            .with_language(language)
            .with_stopwords(stopwords.unwrap_or_default())
            .with_centrality(centrality)
            .with_damping(damping)
            .with_max_iterations(max_iterations)
            .with_convergence_threshold(convergence_threshold)
            .with_parallel(parallel);

        let inner = Summarizer::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Summarize text; `num_sentences` defaults to the configured count
    #[pyo3(signature = (text, num_sentences=None))]
    fn summarize(&self, py: Python<'_>, text: &str, num_sentences: Option<i64>) -> PyResult<String> {
        let count = match num_sentences {
            Some(n) => sentence_count(n)?,
            None => self.inner.config().num_sentences,
        };
        py.allow_threads(|| self.inner.summarize(text, count))
            .map_err(to_py_err)
    }

    /// Summarize and return scores for every sentence
    #[pyo3(signature = (text, num_sentences=None))]
    fn summarize_detailed(
        &self,
        py: Python<'_>,
        text: &str,
        num_sentences: Option<i64>,
    ) -> PyResult<PySummary> {
        let count = match num_sentences {
            Some(n) => sentence_count(n)?,
            None => self.inner.config().num_sentences,
        };
        py.allow_threads(|| self.inner.summarize_detailed(text, count))
            .map(Into::into)
            .map_err(to_py_err)
    }

    /// Summarize several documents in parallel
    #[pyo3(signature = (texts, num_sentences=None))]
    fn summarize_batch(
        &self,
        py: Python<'_>,
        texts: Vec<String>,
        num_sentences: Option<i64>,
    ) -> PyResult<Vec<String>> {
        let count = match num_sentences {
            Some(n) => sentence_count(n)?,
            None => self.inner.config().num_sentences,
        };
        py.allow_threads(|| self.inner.summarize_batch(&texts, count))
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Summarizer(num_sentences={}, language='{}', centrality={:?})",
            config.num_sentences, config.language, config.centrality
        )
    }
}

/// Summarize text with a fresh summarizer for `language`
#[pyfunction]
#[pyo3(signature = (text, num_sentences=3, language="en"))]
pub fn summarize(py: Python<'_>, text: &str, num_sentences: i64, language: &str) -> PyResult<String> {
    let count = sentence_count(num_sentences)?;
    let summarizer = Summarizer::new(SummarizerConfig::new().with_language(language))
        .map_err(to_py_err)?;
    py.allow_threads(|| summarizer.summarize(text, count))
        .map_err(to_py_err)
}
