//! Property tests for golden-record merging.

use proptest::prelude::*;

use goldrec_core::models::{Cluster, ClusterAssignment};
use goldrec_core::record::Record;
use goldrec_merge::{merge_all, merge_cluster};

fn arb_record() -> impl Strategy<Value = Record> {
    (
        proptest::option::of("[A-Z][a-z]{1,6}"),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of(0u32..20_000),
        proptest::option::of("[a-z ]{0,40}"),
    )
        .prop_map(|(first, email_local, days, notes)| {
            let mut r = Record::empty();
            r.first_name = first;
            r.email = email_local.map(|l| format!("{l}@example.com"));
            r.birthdate = days.and_then(|d| {
                chrono::NaiveDate::from_ymd_opt(1950, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(d as u64))
            });
            r.notes = notes;
            r
        })
}

proptest! {
    #[test]
    fn merging_twice_is_byte_identical(records in proptest::collection::vec(arb_record(), 1..8)) {
        let cluster = Cluster {
            id: 0,
            members: (0..records.len()).collect(),
        };
        let a = merge_cluster(&cluster, &records).unwrap();
        let b = merge_cluster(&cluster, &records).unwrap();
        prop_assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }

    #[test]
    fn merged_fields_come_from_the_cluster(records in proptest::collection::vec(arb_record(), 1..8)) {
        let cluster = Cluster {
            id: 0,
            members: (0..records.len()).collect(),
        };
        let golden = merge_cluster(&cluster, &records).unwrap();

        if !golden.first_name.is_empty() {
            prop_assert!(records
                .iter()
                .any(|r| r.first_name.as_deref() == Some(golden.first_name.as_str())));
        }
        if let Some(birthdate) = golden.birthdate {
            prop_assert!(records.iter().all(|r| r.birthdate.map_or(true, |d| d >= birthdate)));
            prop_assert!(records.iter().any(|r| r.birthdate == Some(birthdate)));
        }
    }

    #[test]
    fn one_golden_record_per_nonempty_cluster(records in proptest::collection::vec(arb_record(), 2..10)) {
        // Split records into two clusters: evens and odds.
        let evens: Vec<usize> = (0..records.len()).step_by(2).collect();
        let odds: Vec<usize> = (1..records.len()).step_by(2).collect();
        let mut by_record = vec![0usize; records.len()];
        for &id in &odds {
            by_record[id] = 1;
        }
        let assignment = ClusterAssignment {
            clusters: vec![
                Cluster { id: 0, members: evens },
                Cluster { id: 1, members: odds },
            ],
            by_record,
        };

        let golden = merge_all(&assignment, &records);
        prop_assert_eq!(golden.len(), 2);
        prop_assert_eq!(golden[0].cluster_id, 0);
        prop_assert_eq!(golden[1].cluster_id, 1);
    }
}
