//! Property tests for match-graph clustering.

use std::collections::HashSet;

use proptest::prelude::*;

use goldrec_core::record::{CandidatePair, Decision, PairFeatures, ScoredPair};
use goldrec_feedback::FeedbackStore;
use goldrec_graph::{build_match_graph, resolve_clusters};

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

/// Arbitrary scored pair sets over `n` records (canonical ids, i < j).
fn arb_pairs(n: usize) -> impl Strategy<Value = Vec<ScoredPair>> {
    proptest::collection::vec((0..n, 0..n, 0.0f64..=1.0), 0..30).prop_map(|raw| {
        raw.into_iter()
            .filter(|(a, b, _)| a != b)
            .map(|(a, b, p)| scored(a.min(b), a.max(b), p))
            .collect()
    })
}

proptest! {
    #[test]
    fn cluster_assignment_is_a_partition(pairs in arb_pairs(10)) {
        let feedback = FeedbackStore::new(10);
        let graph = build_match_graph(10, &pairs, &feedback, 0.8);
        let assignment = resolve_clusters(&graph);

        // Every record appears in exactly one cluster.
        prop_assert_eq!(assignment.by_record.len(), 10);
        let mut seen = HashSet::new();
        for cluster in &assignment.clusters {
            for &member in &cluster.members {
                prop_assert!(seen.insert(member), "record {} in two clusters", member);
                prop_assert_eq!(assignment.by_record[member], cluster.id);
            }
        }
        prop_assert_eq!(seen.len(), 10);
    }

    #[test]
    fn clustering_is_idempotent(pairs in arb_pairs(8)) {
        let feedback = FeedbackStore::new(8);
        let g1 = build_match_graph(8, &pairs, &feedback, 0.8);
        let g2 = build_match_graph(8, &pairs, &feedback, 0.8);
        prop_assert_eq!(resolve_clusters(&g1), resolve_clusters(&g2));
    }

    #[test]
    fn no_feedback_always_separates(pairs in arb_pairs(6)) {
        // Force `No` on every pair: regardless of probabilities, no edges
        // survive and every record is a singleton.
        let mut feedback = FeedbackStore::new(6);
        for p in &pairs {
            feedback.record(p.pair.id1, p.pair.id2, Decision::No).unwrap();
        }
        let graph = build_match_graph(6, &pairs, &feedback, 0.8);
        prop_assert_eq!(graph.edge_count(), 0);

        let assignment = resolve_clusters(&graph);
        prop_assert_eq!(assignment.clusters.len(), 6);
    }

    #[test]
    fn yes_feedback_always_joins(a in 0usize..6, b in 0usize..6, p in 0.0f64..=1.0) {
        prop_assume!(a != b);
        let mut feedback = FeedbackStore::new(6);
        feedback.record(a, b, Decision::Yes).unwrap();
        let pairs = vec![scored(a.min(b), a.max(b), p)];
        let graph = build_match_graph(6, &pairs, &feedback, 0.8);
        let assignment = resolve_clusters(&graph);
        prop_assert_eq!(assignment.cluster_of(a), assignment.cluster_of(b));
    }

    #[test]
    fn threshold_monotonicity(pairs in arb_pairs(8), lo in 0.1f64..0.5, hi in 0.5f64..0.9) {
        // Raising the threshold can only remove edges, so the cluster
        // count can only grow.
        let feedback = FeedbackStore::new(8);
        let loose = resolve_clusters(&build_match_graph(8, &pairs, &feedback, lo));
        let strict = resolve_clusters(&build_match_graph(8, &pairs, &feedback, hi));
        prop_assert!(strict.clusters.len() >= loose.clusters.len());
    }
}

#[test]
fn high_probability_pair_with_no_feedback_stays_split() {
    let mut feedback = FeedbackStore::new(2);
    feedback.record(0, 1, Decision::No).unwrap();
    let graph = build_match_graph(2, &[scored(0, 1, 0.9)], &feedback, 0.8);
    let assignment = resolve_clusters(&graph);
    assert_eq!(assignment.clusters.len(), 2);
    assert_ne!(assignment.cluster_of(0), assignment.cluster_of(1));
}
