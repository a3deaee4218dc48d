//! SessionManager — concurrent per-session access via DashMap.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use goldrec_core::config::GoldrecConfig;
use goldrec_core::errors::{GoldrecResult, SessionError};
use goldrec_core::record::{IdentifierField, Record};

use crate::context::SessionContext;

/// Thread-safe session registry. Each uploaded dataset gets its own
/// [`SessionContext`]; mutation goes through [`SessionManager::with_session`],
/// which holds the entry's shard lock for the duration of the closure —
/// per-session single-writer, as the engine requires.
pub struct SessionManager {
    sessions: Arc<DashMap<String, SessionContext>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Create a session for an uploaded dataset and return its id.
    pub fn create_session(
        &self,
        records: Vec<Record>,
        identifier: IdentifierField,
        config: GoldrecConfig,
    ) -> GoldrecResult<String> {
        let session_id = Uuid::new_v4().to_string();
        let ctx = SessionContext::new(session_id.clone(), records, identifier, config)?;
        info!(session = %session_id, records = ctx.record_count(), "session created");
        self.sessions.insert(session_id.clone(), ctx);
        Ok(session_id)
    }

    /// A cloned snapshot of a session context.
    pub fn get_session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Run an operation against a session with exclusive access.
    pub fn with_session<T>(
        &self,
        session_id: &str,
        op: impl FnOnce(&mut SessionContext) -> T,
    ) -> GoldrecResult<T> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::SessionNotFound {
                id: session_id.to_string(),
            })?;
        Ok(op(entry.value_mut()))
    }

    /// Drop derived artifacts and feedback, keeping the session's dataset.
    pub fn reset_session(&self, session_id: &str) -> GoldrecResult<()> {
        self.with_session(session_id, |ctx| ctx.reset())
    }

    /// Remove a session entirely.
    pub fn remove_session(&self, session_id: &str) -> Option<SessionContext> {
        self.sessions.remove(session_id).map(|(_, ctx)| ctx)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
