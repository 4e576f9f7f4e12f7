//! SessionManager: concurrent per-user session access via DashMap.

use dashmap::DashMap;
use std::sync::Arc;

use navicue_catalog::Catalog;
use navicue_core::errors::{NavicueError, NavicueResult};
use navicue_core::{CueOutcome, NavicueConfig, UserContext};
use navicue_lifecycle::InputEvent;
use navicue_normalizer::Normalizer;
use navicue_state::StateSnapshot;

use crate::session::CueSession;

/// Thread-safe registry of live sessions sharing one catalog and config.
///
/// Each session is locked only for the duration of a call, so different users
/// proceed in parallel while calls for the same user are serialized.
pub struct SessionManager {
    sessions: Arc<DashMap<String, CueSession>>,
    catalog: Arc<Catalog>,
    config: NavicueConfig,
    normalizer: Normalizer,
}

impl SessionManager {
    /// Create a manager whose sessions share `catalog` and `config`.
    pub fn new(catalog: Arc<Catalog>, config: NavicueConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            catalog,
            config,
            normalizer: Normalizer::new(),
        }
    }

    /// Normalizer (and its sinks) given to every session created afterwards.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Create a session. If the id was already in use, the replaced session is
    /// ended and its final state returned.
    pub fn create_session(&self, session_id: String, context: UserContext) -> Option<StateSnapshot> {
        let session = CueSession::new(session_id.clone(), context, self.catalog.clone(), &self.config)
            .with_normalizer(self.normalizer.clone());
        self.insert(session_id, session)
    }

    /// Resume a session from persisted state. Returns the replaced session's
    /// final state, as `create_session` does.
    pub fn restore_session(
        &self,
        session_id: String,
        snapshot: StateSnapshot,
    ) -> Option<StateSnapshot> {
        let session =
            CueSession::restore(session_id.clone(), snapshot, self.catalog.clone(), &self.config)
                .with_normalizer(self.normalizer.clone());
        self.insert(session_id, session)
    }

    fn insert(&self, session_id: String, session: CueSession) -> Option<StateSnapshot> {
        let previous = self.sessions.insert(session_id.clone(), session)?;
        tracing::warn!(session_id = %session_id, "session replaced");
        Some(previous.end())
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut CueSession) -> R,
    ) -> NavicueResult<R> {
        let mut entry = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| NavicueError::SessionNotFound {
                session_id: session_id.to_string(),
            })?;
        Ok(f(entry.value_mut()))
    }

    /// Present the next cue for a session. Returns the cue id.
    pub fn present_next(&self, session_id: &str, now: u64) -> NavicueResult<String> {
        self.with_session(session_id, |s| s.present_next(now).map(|c| c.cue().id.clone()))?
    }

    /// Forward renderer input to a session's live presentation.
    pub fn handle(
        &self,
        session_id: &str,
        event: InputEvent,
        now: u64,
    ) -> NavicueResult<Option<CueOutcome>> {
        self.with_session(session_id, |s| s.handle(event, now))?
    }

    /// Tick every session. Returns the outcomes produced, keyed by session id.
    pub fn tick_all(&self, now: u64) -> Vec<(String, CueOutcome)> {
        self.sessions
            .iter_mut()
            .filter_map(|mut entry| {
                let outcome = entry.value_mut().tick(now)?;
                Some((entry.key().clone(), outcome))
            })
            .collect()
    }

    /// Remove a session and return its final state.
    pub fn end_session(&self, session_id: &str) -> Option<StateSnapshot> {
        self.sessions
            .remove(session_id)
            .map(|(_, session)| session.end())
    }

    /// Whether a session with this id exists.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Get all session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    /// The catalog shared by every session.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}
