use serde::{Deserialize, Serialize};

/// Opaque rendered output of the explainability collaborator
/// (e.g. a feature-contribution plot). Consumed, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationArtifact {
    /// Media type of `bytes`, e.g. "image/png".
    pub media_type: String,
    pub bytes: Vec<u8>,
}
