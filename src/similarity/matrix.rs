//! Pairwise similarity matrix
//!
//! Dense row-major N×N matrix of sentence similarities. The diagonal is
//! always zero; every other cell holds `sentence_similarity(i, j)`.

use super::cosine::word_similarity;
use rayon::prelude::*;

/// A dense, symmetric similarity matrix with a zero diagonal
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix for `size` sentences
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.values.chunks(self.size.max(1))
    }

    /// Sum of every row
    pub fn row_sums(&self) -> Vec<f64> {
        self.rows().map(|row| row.iter().sum()).collect()
    }

    /// Check that `m[i][j] == m[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Build the similarity matrix over cleaned sentences
///
/// Only the upper triangle is computed; the estimator is exactly symmetric so
/// the lower triangle is mirrored.
pub fn build_similarity_matrix<S: AsRef<str>>(cleaned: &[S]) -> SimilarityMatrix {
    let words = split_all(cleaned);
    let n = words.len();
    let mut matrix = SimilarityMatrix::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = word_similarity(&words[i], &words[j]);
            matrix.set(i, j, sim);
            matrix.set(j, i, sim);
        }
    }

    matrix
}

/// Build the similarity matrix with one rayon task per row
///
/// Produces exactly the same matrix as [`build_similarity_matrix`].
pub fn build_similarity_matrix_parallel<S: AsRef<str> + Sync>(
    cleaned: &[S],
) -> SimilarityMatrix {
    let words = split_all(cleaned);
    let n = words.len();

    let values: Vec<f64> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let words = &words;
            (0..n).map(move |j| {
                if i == j {
                    0.0
                } else {
                    word_similarity(&words[i], &words[j])
                }
            })
        })
        .collect();

    SimilarityMatrix { size: n, values }
}

fn split_all<S: AsRef<str>>(cleaned: &[S]) -> Vec<Vec<&str>> {
    cleaned
        .iter()
        .map(|s| s.as_ref().split_whitespace().collect())
        .collect()
}
