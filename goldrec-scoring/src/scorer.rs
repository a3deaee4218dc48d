use tracing::info;

use goldrec_core::errors::{GoldrecResult, ScoringError};
use goldrec_core::record::{round_score, CandidatePair, PairFeatures, ScoredPair};
use goldrec_core::traits::IPairClassifier;

/// Score a batch of candidate pairs with the given classifier.
///
/// Pure with respect to prior runs: the output depends only on the feature
/// vectors. Every feature is checked before the classifier runs and every
/// returned probability is checked after; any violation aborts the batch.
pub fn score_pairs(
    pairs: &[CandidatePair],
    classifier: &dyn IPairClassifier,
) -> GoldrecResult<Vec<ScoredPair>> {
    let features: Vec<PairFeatures> = pairs
        .iter()
        .map(|p| {
            if p.features.is_finite() {
                Ok(p.features)
            } else {
                Err(ScoringError::MalformedFeatures {
                    id1: p.id1,
                    id2: p.id2,
                    reason: format!(
                        "non-finite features: lexical_sim={}, semantic_sim={}",
                        p.features.lexical_sim, p.features.semantic_sim
                    ),
                })
            }
        })
        .collect::<Result<_, _>>()?;

    let probabilities = classifier.predict_proba(&features)?;
    if probabilities.len() != pairs.len() {
        return Err(ScoringError::BatchSizeMismatch {
            expected: pairs.len(),
            actual: probabilities.len(),
        }
        .into());
    }

    let scored = pairs
        .iter()
        .zip(probabilities)
        .enumerate()
        .map(|(index, (pair, probability))| {
            if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
                return Err(ScoringError::InvalidProbability {
                    index,
                    value: probability,
                });
            }
            Ok(ScoredPair {
                pair: pair.clone(),
                probability: round_score(probability),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        pairs = scored.len(),
        model = classifier.name(),
        "pair scoring complete"
    );

    Ok(scored)
}
