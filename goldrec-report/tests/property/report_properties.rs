//! Property tests for report statistics and AUC.

use proptest::prelude::*;

use goldrec_core::config::ReportConfig;
use goldrec_core::record::{CandidatePair, PairFeatures, ScoredPair};
use goldrec_report::{match_stats, roc_auc};

fn scored(id1: usize, id2: usize, probability: f64) -> ScoredPair {
    ScoredPair {
        pair: CandidatePair {
            id1,
            id2,
            name1: String::new(),
            name2: String::new(),
            features: PairFeatures {
                lexical_sim: 0.0,
                semantic_sim: 0.0,
            },
        },
        probability,
    }
}

fn arb_samples() -> impl Strategy<Value = Vec<(bool, f64)>> {
    proptest::collection::vec((any::<bool>(), 0.0f64..=1.0), 2..40)
}

proptest! {
    #[test]
    fn auc_is_a_unit_scalar_on_two_class_input(samples in arb_samples()) {
        let has_both = samples.iter().any(|(l, _)| *l) && samples.iter().any(|(l, _)| !*l);
        prop_assume!(has_both);

        let auc = roc_auc(&samples).unwrap();
        prop_assert!((0.0..=1.0).contains(&auc), "auc {auc} out of range");
    }

    #[test]
    fn auc_is_invariant_under_sample_order(samples in arb_samples()) {
        let has_both = samples.iter().any(|(l, _)| *l) && samples.iter().any(|(l, _)| !*l);
        prop_assume!(has_both);

        let mut reversed = samples.clone();
        reversed.reverse();
        let a = roc_auc(&samples).unwrap();
        let b = roc_auc(&reversed).unwrap();
        prop_assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn stats_bands_are_consistent(
        probabilities in proptest::collection::vec(0.0f64..=1.0, 0..50)
    ) {
        let pairs: Vec<ScoredPair> = probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| scored(i, i + 1, p))
            .collect();
        let config = ReportConfig::default();
        let stats = match_stats(&pairs, &config);

        let expected_duplicates = probabilities
            .iter()
            .filter(|&&p| p >= config.duplicate_cutoff)
            .count();
        let expected_low = probabilities
            .iter()
            .filter(|&&p| p >= config.uncertainty_low && p < config.uncertainty_high)
            .count();
        prop_assert_eq!(stats.duplicates, expected_duplicates);
        prop_assert_eq!(stats.low_certainty, expected_low);
        prop_assert!(stats.golden_records <= probabilities.len() + 1);
    }
}
