//! Fixed-point centrality by power iteration
//!
//! Weighted PageRank over the similarity matrix: each sentence distributes its
//! score to its neighbours in proportion to similarity. Rows with no similarity
//! at all (dangling sentences) spread their mass uniformly.

use crate::errors::{Result, SummarizeError};
use crate::similarity::SimilarityMatrix;
use crate::types::SummarizerConfig;

/// Result of a power-iteration run
#[derive(Debug, Clone)]
pub struct CentralityResult {
    /// Score per sentence, summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final L1 delta between iterations
    pub delta: f64,
    /// Whether the threshold was reached before `max_iterations`
    pub converged: bool,
}

/// Power-iteration PageRank over a similarity matrix
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub threshold: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl PowerIteration {
    /// Create with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, iteration limit and threshold from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        Self::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold)
            .validated()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn validated(self) -> Result<Self> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 || self.threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(
                "max_iterations and convergence_threshold must be > 0",
            ));
        }
        Ok(self)
    }

    /// Run power iteration
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, matrix: &SimilarityMatrix) -> CentralityResult {
        let n = matrix.size();
        if n == 0 {
            return CentralityResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let transition = Transition::new(matrix);
        let mut scores = vec![1.0 / n as f64; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations {
            let next = transition.step(&scores, self.damping);
            delta = l1_distance(&scores, &next);
            scores = next;
            iterations += 1;

            if delta <= self.threshold {
                break;
            }
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            scores.iter_mut().for_each(|score| *score /= sum);
        }

        CentralityResult {
            scores,
            iterations,
            delta,
            converged: delta <= self.threshold,
        }
    }
}

/// Row-stochastic form of a similarity matrix
///
/// `share(i, j)` is the fraction of sentence `i`'s score passed to `j`.
/// Sentences with no similarity to anything are dangling; their score is
/// spread evenly over all sentences instead.
struct Transition {
    size: usize,
    shares: Vec<f64>,
    dangling: Vec<bool>,
}

impl Transition {
    fn new(matrix: &SimilarityMatrix) -> Self {
        let size = matrix.size();
        let mut shares = Vec::with_capacity(size * size);
        let mut dangling = Vec::with_capacity(size);

        for (row, total) in matrix.rows().zip(matrix.row_sums()) {
            if total > 0.0 {
                shares.extend(row.iter().map(|weight| weight / total));
                dangling.push(false);
            } else {
                shares.extend(std::iter::repeat(0.0).take(size));
                dangling.push(true);
            }
        }

        Self {
            size,
            shares,
            dangling,
        }
    }

    fn share(&self, from: usize, to: usize) -> f64 {
        self.shares[from * self.size + to]
    }

    /// One damped update: each sentence collects its incoming shares
    fn step(&self, scores: &[f64], damping: f64) -> Vec<f64> {
        let n = self.size as f64;
        let dangling_mass: f64 = scores
            .iter()
            .zip(&self.dangling)
            .filter(|(_, dangling)| **dangling)
            .map(|(score, _)| score)
            .sum();
        let base = (1.0 - damping) / n + damping * dangling_mass / n;

        (0..self.size)
            .map(|to| {
                let incoming: f64 = scores
                    .iter()
                    .enumerate()
                    .map(|(from, score)| score * self.share(from, to))
                    .sum();
                base + damping * incoming
            })
            .collect()
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
