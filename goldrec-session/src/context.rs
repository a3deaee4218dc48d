//! SessionContext — one uploaded dataset and everything derived from it.

use chrono::{DateTime, Utc};

use goldrec_core::config::GoldrecConfig;
use goldrec_core::errors::GoldrecResult;
use goldrec_core::record::{CandidatePair, IdentifierField, Record, ScoredPair};
use goldrec_feedback::FeedbackStore;

/// Per-session state: the immutable record set, the caller's identifier
/// field, validated config, and the pipeline artifacts derived so far.
///
/// Created on upload, reset or removed explicitly — never shared across
/// sessions. Pipeline stages fill `candidate_pairs` and `scored_pairs` in
/// order; clusters and golden records are always derived on demand so
/// they can never go stale against feedback.
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub last_activity: DateTime<Utc>,

    identifier: IdentifierField,
    config: GoldrecConfig,
    records: Vec<Record>,
    pub(crate) candidate_pairs: Option<Vec<CandidatePair>>,
    pub(crate) scored_pairs: Option<Vec<ScoredPair>>,
    pub(crate) feedback: FeedbackStore,
}

impl SessionContext {
    /// Create a context for an uploaded dataset. The config is validated
    /// here so every later stage can trust it.
    pub fn new(
        session_id: String,
        records: Vec<Record>,
        identifier: IdentifierField,
        config: GoldrecConfig,
    ) -> GoldrecResult<Self> {
        config.validate()?;
        let now = Utc::now();
        let feedback = FeedbackStore::new(records.len());
        Ok(Self {
            session_id,
            created_at: now,
            last_activity: now,
            identifier,
            config,
            records,
            candidate_pairs: None,
            scored_pairs: None,
            feedback,
        })
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn identifier(&self) -> IdentifierField {
        self.identifier
    }

    pub fn config(&self) -> &GoldrecConfig {
        &self.config
    }

    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    /// Candidate pairs, if pair generation has run.
    pub fn candidate_pairs(&self) -> Option<&[CandidatePair]> {
        self.candidate_pairs.as_deref()
    }

    /// Scored pairs, if scoring has run.
    pub fn scored_pairs(&self) -> Option<&[ScoredPair]> {
        self.scored_pairs.as_deref()
    }

    /// Drop every derived artifact and all feedback, keeping the dataset.
    pub fn reset(&mut self) {
        self.candidate_pairs = None;
        self.scored_pairs = None;
        self.feedback = FeedbackStore::new(self.records.len());
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    /// Duration since the last mutation.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }
}
