//! Property tests for the feedback store.

use proptest::prelude::*;

use goldrec_core::record::{Decision, FeedbackEntry};
use goldrec_feedback::FeedbackStore;

fn arb_decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Decision::Yes),
        Just(Decision::No),
        Just(Decision::Undecided),
    ]
}

fn arb_entry(record_count: usize) -> impl Strategy<Value = FeedbackEntry> {
    (0..record_count, 0..record_count, arb_decision()).prop_map(|(id1, id2, decision)| {
        FeedbackEntry { id1, id2, decision }
    })
}

proptest! {
    #[test]
    fn lookup_is_symmetric_after_any_submission(
        entries in proptest::collection::vec(arb_entry(12), 0..40)
    ) {
        let mut store = FeedbackStore::new(12);
        store.submit(&entries);

        for a in 0..12usize {
            for b in 0..12usize {
                prop_assert_eq!(store.lookup(a, b), store.lookup(b, a));
            }
        }
    }

    #[test]
    fn last_write_wins_over_any_sequence(
        entries in proptest::collection::vec(arb_entry(8), 1..40)
    ) {
        let mut store = FeedbackStore::new(8);
        store.submit(&entries);

        // The store must agree with a naive replay that keeps only the
        // final valid decision per canonical pair.
        for a in 0..8usize {
            for b in (a + 1)..8usize {
                let expected = entries
                    .iter()
                    .filter(|e| {
                        let (lo, hi) = if e.id1 <= e.id2 { (e.id1, e.id2) } else { (e.id2, e.id1) };
                        (lo, hi) == (a, b)
                    })
                    .map(|e| e.decision)
                    .last();
                prop_assert_eq!(store.lookup(a, b), expected);
            }
        }
    }

    #[test]
    fn export_is_sorted_and_canonical(
        entries in proptest::collection::vec(arb_entry(10), 0..40)
    ) {
        let mut store = FeedbackStore::new(10);
        store.submit(&entries);

        let exported = store.all();
        for e in &exported {
            prop_assert!(e.id1 < e.id2);
        }
        for window in exported.windows(2) {
            prop_assert!((window[0].id1, window[0].id2) < (window[1].id1, window[1].id2));
        }

        // Round-trip: rebuilding from the export reproduces the store.
        let (rebuilt, summary) = FeedbackStore::from_entries(10, &exported);
        prop_assert_eq!(summary.rejected.len(), 0);
        prop_assert_eq!(rebuilt.all(), exported);
    }

    #[test]
    fn rejected_entries_never_mutate_the_store(
        valid in proptest::collection::vec(arb_entry(6), 0..20),
        bad_id in 6usize..20
    ) {
        let mut store = FeedbackStore::new(6);
        store.submit(&valid);
        let before = store.all();

        let summary = store.submit(&[FeedbackEntry {
            id1: 0,
            id2: bad_id,
            decision: Decision::Yes,
        }]);
        prop_assert_eq!(summary.accepted, 0);
        prop_assert_eq!(store.all(), before);
    }
}
