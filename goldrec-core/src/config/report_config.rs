use serde::{Deserialize, Serialize};

use super::defaults;

/// Report and statistics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Pairs at or above this probability count as duplicates.
    pub duplicate_cutoff: f64,
    /// Low-certainty band: `uncertainty_low <= p < uncertainty_high`.
    pub uncertainty_low: f64,
    pub uncertainty_high: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            duplicate_cutoff: defaults::DEFAULT_DUPLICATE_CUTOFF,
            uncertainty_low: defaults::DEFAULT_UNCERTAINTY_LOW,
            uncertainty_high: defaults::DEFAULT_UNCERTAINTY_HIGH,
        }
    }
}
