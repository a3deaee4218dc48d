//! # goldrec-features
//!
//! Similarity feature extraction: composite text surrogates, corpus-fitted
//! TF-IDF lexical similarity, embedding cosine similarity, and O(n²)
//! candidate pair generation.

pub mod pairgen;
pub mod similarity;
pub mod tfidf;

pub use pairgen::generate_pairs;
pub use tfidf::TfidfModel;
