//! Sentence centrality ranking
//!
//! Scores every sentence from the similarity matrix and orders sentences by
//! descending score, ties going to the earlier sentence.

pub mod centrality;
pub mod pagerank;

pub use centrality::{degree_scores, rank_by_score};
pub use pagerank::{CentralityResult, PowerIteration};
