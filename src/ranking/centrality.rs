//! Degree centrality
//!
//! A sentence's score is its total similarity to every other sentence.

use crate::similarity::SimilarityMatrix;

/// Row-sum score of every sentence
pub fn degree_scores(matrix: &SimilarityMatrix) -> Vec<f64> {
    matrix.row_sums()
}

/// Sentence indices ordered by descending score, then ascending index
pub fn rank_by_score(scores: &[f64]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..scores.len()).collect();
    ranking.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    ranking
}
