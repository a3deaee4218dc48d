use serde::{Deserialize, Serialize};

/// Aggregate matching statistics for display/export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Distinct record ids appearing as any pair endpoint. Intentionally
    /// "records involved in matching", not the resolved cluster count.
    pub golden_records: usize,
    /// Pairs at or above the duplicate cutoff.
    pub duplicates: usize,
    /// Pairs inside the low-certainty probability band.
    pub low_certainty: usize,
}
