use serde::{Deserialize, Serialize};

use super::{ClusterId, GoldenRecord};
use crate::record::{Decision, Record, RecordId};

/// One row of the "all records" sheet: a source record with its final cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordWithCluster {
    pub id: RecordId,
    pub cluster_id: ClusterId,
    #[serde(flatten)]
    pub record: Record,
}

/// One row of the pairs sheet: scores plus the recorded human decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairAuditRow {
    pub id1: RecordId,
    pub id2: RecordId,
    pub name1: String,
    pub name2: String,
    pub lexical_sim: f64,
    pub semantic_sim: f64,
    pub probability: f64,
    pub decision: Option<Decision>,
}

/// The multi-sheet report artifact. Writing it to a tabular file format is
/// the persistence collaborator's job; these rows are the fixed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportWorkbook {
    pub golden_records: Vec<GoldenRecord>,
    pub records: Vec<RecordWithCluster>,
    pub pairs: Vec<PairAuditRow>,
}
