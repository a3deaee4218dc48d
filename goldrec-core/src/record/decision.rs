use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// A human decision for a candidate pair. Three-valued on purpose:
/// `Undecided` is a recorded state, not the absence of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Yes,
    No,
    Undecided,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::Undecided => write!(f, "Undecided"),
        }
    }
}

/// The serialization contract for feedback submission and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id1: RecordId,
    pub id2: RecordId,
    pub decision: Decision,
}
