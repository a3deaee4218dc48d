//! Serde-loadable logistic classifier artifact.
//!
//! Models are trained offline; what ships is a small JSON document of
//! coefficients over the two similarity features. Loading validates the
//! shape once, so `predict_proba` stays infallible on well-formed input.

use serde::{Deserialize, Serialize};

use goldrec_core::errors::{GoldrecResult, ScoringError};
use goldrec_core::record::PairFeatures;
use goldrec_core::traits::IPairClassifier;

/// Logistic regression over `[lexical_sim, semantic_sim]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    /// One weight per feature, in `PairFeatures::as_array` order.
    weights: [f64; 2],
    intercept: f64,
}

impl LogisticArtifact {
    pub fn new(weights: [f64; 2], intercept: f64) -> GoldrecResult<Self> {
        let artifact = Self { weights, intercept };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Load an offline-trained artifact from its JSON document.
    pub fn from_json_str(raw: &str) -> GoldrecResult<Self> {
        let artifact: Self = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> GoldrecResult<()> {
        let finite = self.weights.iter().all(|w| w.is_finite()) && self.intercept.is_finite();
        if !finite {
            return Err(ScoringError::ClassifierFailed {
                reason: "artifact has non-finite coefficients".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl IPairClassifier for LogisticArtifact {
    fn predict_proba(&self, features: &[PairFeatures]) -> GoldrecResult<Vec<f64>> {
        Ok(features
            .iter()
            .map(|f| {
                let x = f.as_array();
                let z = self.weights[0] * x[0] + self.weights[1] * x[1] + self.intercept;
                sigmoid(z)
            })
            .collect())
    }

    fn name(&self) -> &str {
        "logistic-artifact"
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
