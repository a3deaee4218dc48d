use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ClusterId;

/// The single canonical record produced by merging one resolved cluster.
/// Derived, not a persisted source of truth — regenerated whenever
/// clustering or feedback changes.
///
/// Text fields that had no non-null value anywhere in the cluster are the
/// empty string, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenRecord {
    pub cluster_id: ClusterId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub city: String,
    pub country: String,
    /// Earliest birthdate across the cluster, if any member has one.
    pub birthdate: Option<NaiveDate>,
    /// All non-null notes joined by spaces, truncated to a fixed length.
    pub notes: String,
}
