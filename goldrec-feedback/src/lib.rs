//! # goldrec-feedback
//!
//! Session-scoped store of human match decisions, keyed by canonicalized
//! record pairs. Upserts are explicit last-write-wins; entries are
//! validated against the session's record count at the boundary.

pub mod store;

pub use store::{FeedbackStore, RejectedFeedback, SubmissionSummary};
