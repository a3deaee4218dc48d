//! Error taxonomy for the Goldrec engine.
//!
//! Each subsystem has its own error enum; `GoldrecError` aggregates them
//! for callers that cross subsystem boundaries. Stage-level failures are
//! fatal to the requested operation and surfaced verbatim — there are no
//! retries and nothing is silently swallowed.

mod feedback_error;
mod report_error;
mod scoring_error;
mod session_error;

pub use feedback_error::FeedbackError;
pub use report_error::ReportError;
pub use scoring_error::ScoringError;
pub use session_error::SessionError;

/// Top-level error for the Goldrec engine.
#[derive(Debug, thiserror::Error)]
pub enum GoldrecError {
    #[error("unknown identifier field: {name}")]
    UnknownIdentifierField { name: String },

    #[error("feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience alias used across the workspace.
pub type GoldrecResult<T> = Result<T, GoldrecError>;
