/// Session and pipeline-stage errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("{stage} requires a missing upstream artifact: {hint}")]
    MissingPrerequisite {
        stage: &'static str,
        hint: &'static str,
    },

    #[error("dataset is empty; nothing to match")]
    EmptyDataset,

    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    #[error("admission threshold {value} must lie strictly between 0 and 1")]
    InvalidThreshold { value: f64 },
}
