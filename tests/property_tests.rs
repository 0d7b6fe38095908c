//! Property-based tests using proptest

use proptest::prelude::*;
use rapid_summarize::*;

const VOCAB: &[&str] = &[
    "solar", "wind", "river", "engine", "garden", "planet", "coffee", "signal", "market",
    "forest",
];

/// A cleaned sentence: zero or more vocabulary words joined by spaces
fn cleaned_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..6).prop_map(|words| words.join(" "))
}

/// A document of capitalised sentences built from the vocabulary
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::collection::vec(prop::sample::select(VOCAB), 1..6), 1..12)
        .prop_map(|sentences| {
            sentences
                .into_iter()
                .map(|words| {
                    let body = words.join(" ");
                    let mut chars = body.chars();
                    match chars.next() {
                        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
}

fn summarizer() -> Summarizer {
    Summarizer::new(SummarizerConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_similarity_is_symmetric(a in cleaned_sentence(), b in cleaned_sentence()) {
        prop_assert_eq!(sentence_similarity(&a, &b), sentence_similarity(&b, &a));
    }

    #[test]
    fn test_similarity_is_bounded(a in cleaned_sentence(), b in cleaned_sentence()) {
        let sim = sentence_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim), "similarity {} out of range", sim);
    }

    #[test]
    fn test_self_similarity_is_one(a in cleaned_sentence()) {
        prop_assume!(!a.is_empty());
        prop_assert_eq!(sentence_similarity(&a, &a.clone()), 1.0);
    }

    #[test]
    fn test_empty_similarity_is_zero(a in cleaned_sentence()) {
        prop_assert_eq!(sentence_similarity("", &a), 0.0);
        prop_assert_eq!(sentence_similarity(&a, ""), 0.0);
    }

    #[test]
    fn test_matrix_symmetric_zero_diagonal(
        cleaned in prop::collection::vec(cleaned_sentence(), 0..10)
    ) {
        let matrix = build_similarity_matrix(&cleaned);

        prop_assert_eq!(matrix.size(), cleaned.len());
        prop_assert!(matrix.is_symmetric());
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
        }
        prop_assert_eq!(
            &matrix,
            &similarity::build_similarity_matrix_parallel(&cleaned)
        );
    }

    #[test]
    fn test_ranking_is_permutation(scores in prop::collection::vec(0.0f64..5.0, 0..20)) {
        let mut ranking = rank_by_score(&scores);
        for pair in ranking.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(scores[a] > scores[b] || (scores[a] == scores[b] && a < b));
        }
        ranking.sort_unstable();
        prop_assert_eq!(ranking, (0..scores.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_summary_preserves_order_and_size(doc in document(), n in 1usize..6) {
        let s = summarizer();
        let summary = s.summarize_detailed(&doc, n).unwrap();

        if summary.short_circuited {
            prop_assert_eq!(&summary.text, &doc);
        } else {
            prop_assert_eq!(summary.sentences.len(), n.min(summary.total_sentences));
            for pair in summary.sentences.windows(2) {
                prop_assert!(pair[0].index < pair[1].index);
            }
            let joined = summary
                .sentences
                .iter()
                .map(|r| r.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert_eq!(&summary.text, &joined);
        }
        prop_assert!(!summary.is_empty());
    }

    #[test]
    fn test_summarize_deterministic(doc in document(), n in 1usize..6) {
        let s = summarizer();
        let first = s.summarize(&doc, n).unwrap();
        let second = s.summarize(&doc, n).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_power_iteration_scores_sum_to_one(
        cleaned in prop::collection::vec(cleaned_sentence(), 1..10)
    ) {
        let matrix = build_similarity_matrix(&cleaned);
        let result = PowerIteration::new().with_max_iterations(200).run(&matrix);

        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-6, "Scores sum to {} instead of 1", sum);
    }

    #[test]
    fn test_config_validation_properties(
        damping in 0.0f64..=1.0,
        num_sentences in 1usize..100,
        max_iterations in 1usize..500
    ) {
        let config = SummarizerConfig::default()
            .with_damping(damping)
            .with_num_sentences(num_sentences)
            .with_max_iterations(max_iterations);

        prop_assert!(config.validate().is_ok());
    }
}
