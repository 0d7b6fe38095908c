//! Sentence similarity
//!
//! Bag-of-words cosine similarity between cleaned sentences, and the full
//! pairwise similarity matrix over a document.

pub mod cosine;
pub mod matrix;

pub use cosine::sentence_similarity;
pub use matrix::{build_similarity_matrix, build_similarity_matrix_parallel, SimilarityMatrix};
