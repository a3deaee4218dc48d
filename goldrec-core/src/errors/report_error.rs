/// Report/statistics errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("no pairs carry ground-truth cluster labels; AUC cannot be computed")]
    NoGroundTruth,

    #[error("ground-truth labels are single-class (all-positive: {positive}); AUC is undefined")]
    DegenerateGroundTruth { positive: bool },
}
