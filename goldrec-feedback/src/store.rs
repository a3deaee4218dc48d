use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use goldrec_core::errors::FeedbackError;
use goldrec_core::record::{Decision, FeedbackEntry, PairKey, RecordId};

/// In-memory feedback store for one session.
///
/// Decisions are keyed by canonical [`PairKey`], so `lookup(a, b)` and
/// `lookup(b, a)` always agree. Recording a decision for a pair that
/// already has one overwrites it — the most recent decision governs.
#[derive(Debug, Clone)]
pub struct FeedbackStore {
    record_count: usize,
    decisions: HashMap<PairKey, Decision>,
}

/// Outcome of a bulk submission: invalid entries are rejected one by one,
/// never aborting the rest of the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSummary {
    pub accepted: usize,
    pub rejected: Vec<RejectedFeedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedFeedback {
    pub entry: FeedbackEntry,
    pub reason: String,
}

impl FeedbackStore {
    /// Create an empty store for a dataset of `record_count` records.
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count,
            decisions: HashMap::new(),
        }
    }

    /// Rebuild a store from exported entries (e.g. a prior session's dump).
    /// Invalid entries are rejected exactly as in [`FeedbackStore::submit`].
    pub fn from_entries(record_count: usize, entries: &[FeedbackEntry]) -> (Self, SubmissionSummary) {
        let mut store = Self::new(record_count);
        let summary = store.submit(entries);
        (store, summary)
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of pairs with a recorded decision.
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Upsert a decision for a pair. Overwrites any prior decision
    /// (last-write-wins). Rejects self-pairs and out-of-range record ids.
    pub fn record(
        &mut self,
        id1: RecordId,
        id2: RecordId,
        decision: Decision,
    ) -> Result<(), FeedbackError> {
        self.validate(id1, id2)?;
        self.decisions.insert(PairKey::new(id1, id2), decision);
        Ok(())
    }

    /// The current decision for a pair, in either id order.
    pub fn lookup(&self, id1: RecordId, id2: RecordId) -> Option<Decision> {
        if id1 == id2 {
            return None;
        }
        self.decisions.get(&PairKey::new(id1, id2)).copied()
    }

    /// The current decision for a canonical key.
    pub fn lookup_key(&self, key: PairKey) -> Option<Decision> {
        self.decisions.get(&key).copied()
    }

    /// All recorded decisions, ascending by canonical pair key — the
    /// export/audit contract.
    pub fn all(&self) -> Vec<FeedbackEntry> {
        let mut keys: Vec<&PairKey> = self.decisions.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| FeedbackEntry {
                id1: key.lo(),
                id2: key.hi(),
                decision: self.decisions[key],
            })
            .collect()
    }

    /// Apply a batch of entries. Each invalid entry is rejected with its
    /// reason; valid entries are upserted in order, so a later entry for
    /// the same pair wins.
    pub fn submit(&mut self, entries: &[FeedbackEntry]) -> SubmissionSummary {
        let mut accepted = 0usize;
        let mut rejected = Vec::new();

        for entry in entries {
            match self.record(entry.id1, entry.id2, entry.decision) {
                Ok(()) => accepted += 1,
                Err(reason) => {
                    debug!(
                        id1 = entry.id1,
                        id2 = entry.id2,
                        %reason,
                        "rejected feedback entry"
                    );
                    rejected.push(RejectedFeedback {
                        entry: *entry,
                        reason: reason.to_string(),
                    });
                }
            }
        }

        info!(
            accepted,
            rejected = rejected.len(),
            total = self.decisions.len(),
            "feedback submission processed"
        );

        SubmissionSummary { accepted, rejected }
    }

    fn validate(&self, id1: RecordId, id2: RecordId) -> Result<(), FeedbackError> {
        if id1 == id2 {
            return Err(FeedbackError::SelfPair { id: id1 });
        }
        for id in [id1, id2] {
            if id >= self.record_count {
                return Err(FeedbackError::UnknownRecord {
                    id,
                    record_count: self.record_count,
                });
            }
        }
        Ok(())
    }
}
