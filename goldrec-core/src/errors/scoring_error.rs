use crate::record::RecordId;

/// Classifier input/output errors. Any of these aborts the whole scoring
/// batch — partial scoring must never produce an inconsistent graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("malformed feature vector for pair ({id1}, {id2}): {reason}")]
    MalformedFeatures {
        id1: RecordId,
        id2: RecordId,
        reason: String,
    },

    #[error("classifier returned {actual} probabilities for {expected} pairs")]
    BatchSizeMismatch { expected: usize, actual: usize },

    #[error("classifier returned invalid probability {value} at index {index}")]
    InvalidProbability { index: usize, value: f64 },

    #[error("classifier failed: {reason}")]
    ClassifierFailed { reason: String },
}
