use serde::{Deserialize, Serialize};

use crate::constants::SCORE_DECIMALS;
use crate::record::RecordId;

/// Canonicalized unordered pair of distinct record ids. `lo < hi` always,
/// so symmetric lookups hit the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey {
    lo: RecordId,
    hi: RecordId,
}

impl PairKey {
    /// Build the canonical key for two record ids, in either order.
    /// The ids must be distinct; callers validate that at their boundary.
    pub fn new(a: RecordId, b: RecordId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn lo(&self) -> RecordId {
        self.lo
    }

    pub fn hi(&self) -> RecordId {
        self.hi
    }
}

/// Similarity features for one candidate pair. Named scalars in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairFeatures {
    /// Cosine similarity between corpus-fitted TF-IDF vectors of the surrogates.
    pub lexical_sim: f64,
    /// Cosine similarity between embedding vectors of the surrogates.
    pub semantic_sim: f64,
}

impl PairFeatures {
    /// Both features as a fixed-order slice, the classifier's input layout.
    pub fn as_array(&self) -> [f64; 2] {
        [self.lexical_sim, self.semantic_sim]
    }

    /// True when every feature is a finite number.
    pub fn is_finite(&self) -> bool {
        self.lexical_sim.is_finite() && self.semantic_sim.is_finite()
    }
}

/// One unordered candidate pair with similarity features, pre-scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub id1: RecordId,
    pub id2: RecordId,
    /// Display value of the session's identifier field for each record.
    pub name1: String,
    pub name2: String,
    #[serde(flatten)]
    pub features: PairFeatures,
}

impl CandidatePair {
    pub fn key(&self) -> PairKey {
        PairKey::new(self.id1, self.id2)
    }
}

/// A candidate pair annotated with the classifier's match probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    #[serde(flatten)]
    pub pair: CandidatePair,
    /// Probability of match in [0, 1].
    pub probability: f64,
}

impl ScoredPair {
    pub fn key(&self) -> PairKey {
        self.pair.key()
    }
}

/// Round a similarity score or probability to the fixed precision
/// ([`SCORE_DECIMALS`] digits) used everywhere scores are stored.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS as i32);
    (value * factor).round() / factor
}
