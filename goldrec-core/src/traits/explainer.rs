use crate::errors::GoldrecResult;
use crate::models::ExplanationArtifact;
use crate::record::PairFeatures;
use crate::traits::IPairClassifier;

/// Explainability collaborator: renders a visual summary of feature
/// contributions for a scored batch. Consumed, not reimplemented.
pub trait IMatchExplainer: Send + Sync {
    fn explain(
        &self,
        classifier: &dyn IPairClassifier,
        features: &[PairFeatures],
    ) -> GoldrecResult<ExplanationArtifact>;
}
