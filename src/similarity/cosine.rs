//! Bag-of-words cosine similarity
//!
//! Each sentence becomes an integer frequency vector over the union of both
//! sentences' words. Counts, dot product and the product of squared norms stay
//! integral until the final division, so the score is exactly symmetric and an
//! identical pair of ordinary sentences scores exactly 1.0. The norm product is
//! taken in `u128`; a single norm already exceeds `u32` range for a word
//! repeated ~66,000 times.

use rustc_hash::FxHashMap;

/// Similarity between two cleaned sentences (space-joined tokens), in [0, 1]
///
/// Returns 0.0 when either sentence has no words.
pub fn sentence_similarity(a: &str, b: &str) -> f64 {
    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();
    word_similarity(&words_a, &words_b)
}

/// Similarity between two already-split word lists, in [0, 1]
pub fn word_similarity(words_a: &[&str], words_b: &[&str]) -> f64 {
    if words_a.is_empty() || words_b.is_empty() {
        return 0.0;
    }

    let (vector_a, vector_b) = frequency_vectors(words_a, words_b);

    let sum_a: u64 = vector_a.iter().sum();
    let sum_b: u64 = vector_b.iter().sum();
    if sum_a == 0 || sum_b == 0 {
        return 0.0;
    }

    let dot: u64 = vector_a.iter().zip(&vector_b).map(|(x, y)| x * y).sum();
    let norm_a = squared_norm(&vector_a);
    let norm_b = squared_norm(&vector_b);

    let similarity = dot as f64 / ((u128::from(norm_a) * u128::from(norm_b)) as f64).sqrt();
    similarity.clamp(0.0, 1.0)
}

/// Frequency vectors of both word lists over their shared vocabulary
fn frequency_vectors(words_a: &[&str], words_b: &[&str]) -> (Vec<u64>, Vec<u64>) {
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();
    for word in words_a.iter().chain(words_b) {
        let next = slots.len();
        slots.entry(*word).or_insert(next);
    }

    let mut vector_a = vec![0u64; slots.len()];
    let mut vector_b = vec![0u64; slots.len()];
    for word in words_a {
        vector_a[slots[word]] += 1;
    }
    for word in words_b {
        vector_b[slots[word]] += 1;
    }

    (vector_a, vector_b)
}

fn squared_norm(vector: &[u64]) -> u64 {
    vector.iter().map(|x| x * x).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sentences() {
        assert_eq!(sentence_similarity("cat sat mat", "cat sat mat"), 1.0);
        assert_eq!(sentence_similarity("cat cat dog", "cat cat dog"), 1.0);
    }

    #[test]
    fn test_long_repeated_word_does_not_overflow() {
        let long = vec!["x"; 70_000];
        let sim = word_similarity(&long, &long);
        assert!((sim - 1.0).abs() < 1e-12, "got {}", sim);

        let mut mixed = vec!["x"; 70_000];
        mixed.extend(vec!["y"; 70_000]);
        let forward = word_similarity(&long, &mixed);
        assert_eq!(forward, word_similarity(&mixed, &long));
        assert!((forward - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sentences() {
        assert_eq!(sentence_similarity("cat sat", "dog ran"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // [1,1,0] . [1,0,1] / (sqrt2 * sqrt2) = 0.5
        let sim = sentence_similarity("cat sat", "cat ran");
        assert!((sim - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_word_counts_matter() {
        // vocab {cat, dog}: [2,0] . [1,1] / (2 * sqrt2)
        let sim = sentence_similarity("cat cat", "cat dog");
        assert!((sim - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sentences() {
        assert_eq!(sentence_similarity("", "cat"), 0.0);
        assert_eq!(sentence_similarity("cat", ""), 0.0);
        assert_eq!(sentence_similarity("", ""), 0.0);
        assert_eq!(sentence_similarity("   ", "cat"), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("machine learning models", "learning deep models models"),
            ("alpha beta gamma", "gamma delta"),
            ("one", "one two three four"),
        ];
        for (a, b) in pairs {
            assert_eq!(sentence_similarity(a, b), sentence_similarity(b, a));
        }
    }

    #[test]
    fn test_frequency_vectors_share_vocabulary() {
        let (a, b) = frequency_vectors(&["x", "y", "x"], &["y", "z"]);

        assert_eq!(a.len(), 3);
        assert_eq!(a, vec![2, 1, 0]);
        assert_eq!(b, vec![0, 1, 1]);
    }
}
