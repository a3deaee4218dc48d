//! Candidate pair generation.
//!
//! Every unordered combination of two distinct records becomes one
//! candidate pair — O(n²) in the record count, with no blocking or
//! indexing to prune candidates. That quadratic ceiling is a documented
//! limitation of the matching design, not an implementation shortcut.
//! Pair computations are independent and fan out across rayon workers;
//! the indexed collect preserves ascending (id1, id2) order, so output
//! is deterministic.

use rayon::prelude::*;
use tracing::{debug, info};

use goldrec_core::errors::{GoldrecResult, SessionError};
use goldrec_core::record::{round_score, CandidatePair, IdentifierField, PairFeatures, Record};
use goldrec_core::traits::IEmbeddingProvider;

use crate::similarity::cosine_similarity;
use crate::tfidf::TfidfModel;

/// Generate scored-feature candidate pairs for every combination of two
/// distinct records.
///
/// Lexical similarity is the cosine between corpus-fitted TF-IDF vectors
/// of the record surrogates; semantic similarity is the cosine between
/// their embeddings. Both are clamped to [0, 1] and rounded to a fixed
/// precision for reproducibility.
pub fn generate_pairs(
    records: &[Record],
    identifier: IdentifierField,
    embedder: &dyn IEmbeddingProvider,
) -> GoldrecResult<Vec<CandidatePair>> {
    if records.is_empty() {
        return Err(SessionError::EmptyDataset.into());
    }

    let surrogates: Vec<String> = records.iter().map(|r| r.surrogate()).collect();

    debug!(
        provider = embedder.name(),
        dimensions = embedder.dimensions(),
        "embedding record surrogates"
    );
    let embeddings = embedder.embed_batch(&surrogates)?;
    let tfidf = TfidfModel::fit(&surrogates);

    let combinations: Vec<(usize, usize)> = (0..records.len())
        .flat_map(|i| ((i + 1)..records.len()).map(move |j| (i, j)))
        .collect();

    let pairs: Vec<CandidatePair> = combinations
        .par_iter()
        .map(|&(i, j)| {
            let lexical = round_score(tfidf.similarity(i, j));
            let semantic = round_score(
                cosine_similarity(&embeddings[i], &embeddings[j]).max(0.0),
            );
            CandidatePair {
                id1: i,
                id2: j,
                name1: display_name(&records[i], identifier),
                name2: display_name(&records[j], identifier),
                features: PairFeatures {
                    lexical_sim: lexical,
                    semantic_sim: semantic,
                },
            }
        })
        .collect();

    info!(
        records = records.len(),
        pairs = pairs.len(),
        provider = embedder.name(),
        "candidate pair generation complete"
    );

    Ok(pairs)
}

fn display_name(record: &Record, identifier: IdentifierField) -> String {
    identifier.value_of(record).unwrap_or("").to_string()
}
