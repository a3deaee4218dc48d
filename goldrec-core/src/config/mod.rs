//! Engine configuration. Serde-deserializable with defaults, validated at
//! the boundary before a session starts using it.

mod defaults;
mod matching_config;
mod report_config;

pub use defaults::*;
pub use matching_config::MatchingConfig;
pub use report_config::ReportConfig;

use serde::{Deserialize, Serialize};

use crate::errors::GoldrecResult;

/// Top-level Goldrec configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldrecConfig {
    pub matching: MatchingConfig,
    pub report: ReportConfig,
}

impl GoldrecConfig {
    /// Parse a TOML config document and validate it.
    pub fn from_toml_str(raw: &str) -> GoldrecResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> GoldrecResult<()> {
        self.matching.validate()?;
        Ok(())
    }
}
