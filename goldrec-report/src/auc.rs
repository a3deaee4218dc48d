//! ROC-AUC model evaluation.
//!
//! Ground truth is approximate: it compares the pre-resolution cluster
//! labels of a pair's endpoints, i.e. the verdict of a *prior* clustering,
//! not hand-labeled truth. Treat the resulting score as a sanity signal,
//! not a benchmark.

use tracing::debug;

use goldrec_core::errors::ReportError;
use goldrec_core::record::{Record, ScoredPair};

/// Derive `(label, probability)` evaluation samples from scored pairs.
///
/// The label is true when both endpoints carry the same pre-resolution
/// `source_cluster`. Pairs where either endpoint lacks a label are
/// excluded rather than guessed.
pub fn ground_truth_samples(scored: &[ScoredPair], records: &[Record]) -> Vec<(bool, f64)> {
    scored
        .iter()
        .filter_map(|pair| {
            let left = records.get(pair.pair.id1)?.source_cluster?;
            let right = records.get(pair.pair.id2)?.source_cluster?;
            Some((left == right, pair.probability))
        })
        .collect()
}

/// ROC-AUC of the model probabilities against derived ground truth.
pub fn model_auc(scored: &[ScoredPair], records: &[Record]) -> Result<f64, ReportError> {
    let samples = ground_truth_samples(scored, records);
    debug!(
        pairs = scored.len(),
        labeled = samples.len(),
        "derived ground-truth samples"
    );
    roc_auc(&samples)
}

/// Area under the ROC curve via the rank statistic, with tied scores
/// assigned their average rank.
///
/// Degenerate inputs — no samples, or single-class labels — are reported
/// as explicit errors instead of a misleading score.
pub fn roc_auc(samples: &[(bool, f64)]) -> Result<f64, ReportError> {
    if samples.is_empty() {
        return Err(ReportError::NoGroundTruth);
    }
    let positives = samples.iter().filter(|(label, _)| *label).count();
    let negatives = samples.len() - positives;
    if negatives == 0 {
        return Err(ReportError::DegenerateGroundTruth { positive: true });
    }
    if positives == 0 {
        return Err(ReportError::DegenerateGroundTruth { positive: false });
    }

    // Rank all scores ascending; ties share their average rank.
    let mut order: Vec<usize> = (0..samples.len()).collect();
    order.sort_by(|&a, &b| {
        samples[a]
            .1
            .partial_cmp(&samples[b].1)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0f64; samples.len()];
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && samples[order[j + 1]].1 == samples[order[i]].1 {
            j += 1;
        }
        // Positions i..=j (0-based) share the average 1-based rank.
        let average = (i + j) as f64 / 2.0 + 1.0;
        for &index in &order[i..=j] {
            ranks[index] = average;
        }
        i = j + 1;
    }

    let positive_rank_sum: f64 = samples
        .iter()
        .zip(&ranks)
        .filter(|((label, _), _)| *label)
        .map(|(_, rank)| rank)
        .sum();

    let p = positives as f64;
    let n = negatives as f64;
    Ok((positive_rank_sum - p * (p + 1.0) / 2.0) / (p * n))
}
