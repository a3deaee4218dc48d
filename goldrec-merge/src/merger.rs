use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::info;

use goldrec_core::constants::NOTES_MAX_CHARS;
use goldrec_core::models::{Cluster, ClusterAssignment, GoldenRecord};
use goldrec_core::record::Record;

/// Merge one cluster's member records into a golden record.
///
/// Members are visited in ascending record-id order, which fixes every
/// tie-break. Returns `None` when the cluster has no member present in
/// `records`; a field with no non-null value yields its empty default.
pub fn merge_cluster(cluster: &Cluster, records: &[Record]) -> Option<GoldenRecord> {
    let members: Vec<&Record> = cluster
        .members
        .iter()
        .filter_map(|&id| records.get(id))
        .collect();
    if members.is_empty() {
        return None;
    }

    Some(GoldenRecord {
        cluster_id: cluster.id,
        first_name: mode_of(members.iter().filter_map(|r| r.first_name.as_deref())),
        last_name: mode_of(members.iter().filter_map(|r| r.last_name.as_deref())),
        email: mode_of(members.iter().filter_map(|r| r.email.as_deref())),
        phone: mode_of(members.iter().filter_map(|r| r.phone.as_deref())),
        gender: mode_of(members.iter().filter_map(|r| r.gender.as_deref())),
        city: mode_of(members.iter().filter_map(|r| r.city.as_deref())),
        country: mode_of(members.iter().filter_map(|r| r.country.as_deref())),
        birthdate: earliest(members.iter().filter_map(|r| r.birthdate)),
        notes: bounded_notes(members.iter().filter_map(|r| r.notes.as_deref())),
    })
}

/// Merge every cluster of an assignment, in cluster-id order.
pub fn merge_all(assignment: &ClusterAssignment, records: &[Record]) -> Vec<GoldenRecord> {
    let golden: Vec<GoldenRecord> = assignment
        .clusters
        .iter()
        .filter_map(|cluster| merge_cluster(cluster, records))
        .collect();

    info!(
        clusters = assignment.clusters.len(),
        golden_records = golden.len(),
        "golden record merge complete"
    );

    golden
}

/// Most frequent value; ties break to the value first encountered.
/// Empty string when the iterator is empty.
fn mode_of<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    // max_by_key would keep the *last* maximum; ties must break to the
    // first encountered value, so scan in order and replace only on a
    // strictly higher count.
    let mut best: Option<(&str, usize)> = None;
    for value in order {
        let count = counts[value];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string()).unwrap_or_default()
}

/// Earliest date, missing values excluded.
fn earliest(dates: impl Iterator<Item = NaiveDate>) -> Option<NaiveDate> {
    dates.min()
}

/// All non-null notes joined by spaces, truncated to [`NOTES_MAX_CHARS`]
/// characters without splitting a scalar.
fn bounded_notes<'a>(notes: impl Iterator<Item = &'a str>) -> String {
    let joined = notes.collect::<Vec<_>>().join(" ");
    if joined.chars().count() <= NOTES_MAX_CHARS {
        joined
    } else {
        joined.chars().take(NOTES_MAX_CHARS).collect()
    }
}
