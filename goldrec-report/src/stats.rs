use std::collections::HashSet;

use tracing::debug;

use goldrec_core::config::ReportConfig;
use goldrec_core::models::MatchStats;
use goldrec_core::record::{RecordId, ScoredPair};

/// Aggregate statistics over the scored pair set.
///
/// `golden_records` counts distinct record ids appearing as any pair
/// endpoint — records involved in matching, deliberately not the resolved
/// cluster count. `duplicates` and `low_certainty` band the pairs by
/// probability.
pub fn match_stats(scored: &[ScoredPair], config: &ReportConfig) -> MatchStats {
    let mut endpoints: HashSet<RecordId> = HashSet::new();
    let mut duplicates = 0usize;
    let mut low_certainty = 0usize;

    for pair in scored {
        endpoints.insert(pair.pair.id1);
        endpoints.insert(pair.pair.id2);
        if pair.probability >= config.duplicate_cutoff {
            duplicates += 1;
        }
        if pair.probability >= config.uncertainty_low && pair.probability < config.uncertainty_high
        {
            low_certainty += 1;
        }
    }

    let stats = MatchStats {
        golden_records: endpoints.len(),
        duplicates,
        low_certainty,
    };
    debug!(?stats, pairs = scored.len(), "match stats computed");
    stats
}
