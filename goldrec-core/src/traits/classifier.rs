use crate::errors::GoldrecResult;
use crate::record::PairFeatures;

/// Probabilistic pair classifier, trained offline and loaded as an opaque
/// artifact. Must be a pure function of the features — no state across runs.
pub trait IPairClassifier: Send + Sync {
    /// Probability of match, one value in [0, 1] per feature row.
    fn predict_proba(&self, features: &[PairFeatures]) -> GoldrecResult<Vec<f64>>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
