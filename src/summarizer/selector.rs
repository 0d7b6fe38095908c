//! Top-K sentence selection
//!
//! Takes the head of a ranking, restores document order and joins the chosen
//! original sentences.

use crate::types::Sentence;

/// Pick the first `k` ranked indices and sort them into document order
pub fn select_indices(ranking: &[usize], k: usize) -> Vec<usize> {
    let mut selected: Vec<usize> = ranking.iter().copied().take(k).collect();
    selected.sort_unstable();
    selected
}

/// Join the selected sentences with single spaces
pub fn join_selected(sentences: &[Sentence], indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| sentences[i].text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
