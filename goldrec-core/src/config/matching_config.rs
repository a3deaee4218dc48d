use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{GoldrecResult, SessionError};

/// Match-graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Probability cutoff for admitting a model-only pair as an edge.
    /// Must lie strictly between 0 and 1.
    pub admission_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            admission_threshold: defaults::DEFAULT_ADMISSION_THRESHOLD,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> GoldrecResult<()> {
        if !(self.admission_threshold > 0.0 && self.admission_threshold < 1.0) {
            return Err(SessionError::InvalidThreshold {
                value: self.admission_threshold,
            }
            .into());
        }
        Ok(())
    }
}
