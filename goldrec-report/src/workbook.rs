use tracing::info;

use goldrec_core::models::{
    ClusterAssignment, GoldenRecord, PairAuditRow, RecordWithCluster, ReportWorkbook,
};
use goldrec_core::record::{Record, ScoredPair};
use goldrec_feedback::FeedbackStore;

/// Assemble the three-sheet report workbook: golden records, all records
/// with their final cluster id, and pairs with scores and feedback.
///
/// An empty dataset assembles to empty sheets — report generation never
/// fails on "nothing to report". Writing the workbook to a file format is
/// the persistence collaborator's responsibility.
pub fn assemble_workbook(
    records: &[Record],
    assignment: &ClusterAssignment,
    golden_records: &[GoldenRecord],
    scored: &[ScoredPair],
    feedback: &FeedbackStore,
) -> ReportWorkbook {
    let record_rows: Vec<RecordWithCluster> = records
        .iter()
        .zip(&assignment.by_record)
        .enumerate()
        .map(|(id, (record, &cluster_id))| RecordWithCluster {
            id,
            cluster_id,
            record: record.clone(),
        })
        .collect();

    let pair_rows: Vec<PairAuditRow> = scored
        .iter()
        .map(|pair| PairAuditRow {
            id1: pair.pair.id1,
            id2: pair.pair.id2,
            name1: pair.pair.name1.clone(),
            name2: pair.pair.name2.clone(),
            lexical_sim: pair.pair.features.lexical_sim,
            semantic_sim: pair.pair.features.semantic_sim,
            probability: pair.probability,
            decision: feedback.lookup_key(pair.key()),
        })
        .collect();

    info!(
        golden = golden_records.len(),
        records = record_rows.len(),
        pairs = pair_rows.len(),
        "report workbook assembled"
    );

    ReportWorkbook {
        golden_records: golden_records.to_vec(),
        records: record_rows,
        pairs: pair_rows,
    }
}
