//! Property tests for feature extraction and pair generation.

use proptest::prelude::*;

use goldrec_core::errors::GoldrecResult;
use goldrec_core::record::{round_score, IdentifierField, Record};
use goldrec_core::traits::IEmbeddingProvider;

use goldrec_features::generate_pairs;
use goldrec_features::tfidf::TfidfModel;

/// Deterministic embedder: hash-derived vectors, as content-sensitive as a
/// real model for test purposes.
struct HashEmbedder;

impl IEmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> GoldrecResult<Vec<f32>> {
        let hash = blake3::hash(text.as_bytes());
        let bytes = hash.as_bytes();
        Ok((0..32).map(|i| bytes[i] as f32 / 255.0).collect())
    }
    fn embed_batch(&self, texts: &[String]) -> GoldrecResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
    fn dimensions(&self) -> usize {
        32
    }
    fn name(&self) -> &str {
        "hash-test"
    }
}

fn make_records(names: &[String]) -> Vec<Record> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut r = Record::empty();
            r.first_name = Some(name.clone());
            r.email = Some(format!("{}{}@example.com", name.to_lowercase(), i));
            r
        })
        .collect()
}

proptest! {
    #[test]
    fn pairs_are_canonical_and_complete(names in proptest::collection::vec("[a-z]{1,8}", 2..10)) {
        let records = make_records(&names);
        let pairs = generate_pairs(&records, IdentifierField::FirstName, &HashEmbedder).unwrap();

        let n = records.len();
        prop_assert_eq!(pairs.len(), n * (n - 1) / 2);
        for p in &pairs {
            prop_assert!(p.id1 < p.id2, "pair ({}, {}) not canonical", p.id1, p.id2);
            prop_assert!(p.id2 < n);
        }
    }

    #[test]
    fn features_are_rounded_unit_scalars(names in proptest::collection::vec("[a-z]{1,8}", 2..8)) {
        let records = make_records(&names);
        let pairs = generate_pairs(&records, IdentifierField::FirstName, &HashEmbedder).unwrap();

        for p in &pairs {
            for f in p.features.as_array() {
                prop_assert!((0.0..=1.0).contains(&f));
                prop_assert_eq!(f, round_score(f));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(names in proptest::collection::vec("[a-z]{1,8}", 2..8)) {
        let records = make_records(&names);
        let a = generate_pairs(&records, IdentifierField::FirstName, &HashEmbedder).unwrap();
        let b = generate_pairs(&records, IdentifierField::FirstName, &HashEmbedder).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn tfidf_similarity_is_symmetric(docs in proptest::collection::vec("[a-z ]{0,24}", 2..8)) {
        let model = TfidfModel::fit(&docs);
        for i in 0..docs.len() {
            for j in 0..docs.len() {
                let ij = model.similarity(i, j);
                let ji = model.similarity(j, i);
                prop_assert!((ij - ji).abs() < 1e-12);
                prop_assert!((0.0..=1.0).contains(&ij));
            }
        }
    }
}
