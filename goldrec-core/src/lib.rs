//! # goldrec-core
//!
//! Foundation crate for the Goldrec record-matching engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GoldrecConfig;
pub use errors::{GoldrecError, GoldrecResult};
pub use record::{
    CandidatePair, Decision, FeedbackEntry, IdentifierField, PairFeatures, PairKey, Record,
    RecordId, ScoredPair,
};
