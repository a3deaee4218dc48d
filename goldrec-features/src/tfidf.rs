//! Corpus-fitted TF-IDF model for lexical similarity between surrogates.
//!
//! IDF is fitted once over all surrogates of a session, so similarity
//! between two documents reflects how distinctive their shared terms are
//! within that dataset. Vocabulary indices are assigned in first-appearance
//! order and vectors are L2-normalized, so results are deterministic and
//! pairwise similarity is a plain sparse dot product.

use std::collections::HashMap;

use crate::similarity::sparse_dot;

/// TF-IDF vectors for a fixed document corpus.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// One sparse vector per document, sorted ascending by term index.
    vectors: Vec<Vec<(usize, f64)>>,
}

impl TfidfModel {
    /// Fit the model over a corpus of documents.
    pub fn fit(documents: &[String]) -> Self {
        let n_docs = documents.len() as f64;
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        // Vocabulary in first-appearance order, plus document frequency.
        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut df: Vec<usize> = Vec::new();
        for tokens in &tokenized {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for token in tokens {
                let next_index = vocab.len();
                let index = *vocab.entry(token.clone()).or_insert_with(|| {
                    df.push(0);
                    next_index
                });
                if !seen_in_doc.contains(&index) {
                    seen_in_doc.push(index);
                    df[index] += 1;
                }
            }
        }

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                if tokens.is_empty() {
                    return Vec::new();
                }
                let mut tf: HashMap<usize, f64> = HashMap::new();
                for token in tokens {
                    *tf.entry(vocab[token]).or_default() += 1.0;
                }
                let total = tokens.len() as f64;
                let mut vector: Vec<(usize, f64)> = tf
                    .into_iter()
                    .map(|(index, count)| {
                        let idf = (n_docs / df[index] as f64).ln() + 1.0;
                        (index, (count / total) * idf)
                    })
                    .collect();
                vector.sort_by_key(|(index, _)| *index);

                // L2 normalize so sparse_dot is cosine similarity.
                let norm: f64 = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > f64::EPSILON {
                    for (_, w) in &mut vector {
                        *w /= norm;
                    }
                }
                vector
            })
            .collect();

        Self { vectors }
    }

    /// Number of fitted documents.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Cosine similarity between two fitted documents, in [0, 1].
    /// Documents outside the fitted corpus yield 0.0.
    pub fn similarity(&self, a: usize, b: usize) -> f64 {
        match (self.vectors.get(a), self.vectors.get(b)) {
            (Some(va), Some(vb)) => sparse_dot(va, vb).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Lowercase alphanumeric tokenizer. Splits on every non-alphanumeric
/// character, so emails decompose into their local and domain parts.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}
