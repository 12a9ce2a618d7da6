use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use sri_core::storage_keys;
use ts_rs::TS;
use uuid::Uuid;

use crate::FlushOutcome;
use crate::error::StorageError;
use crate::store::{KeyValueStore, load_json, save_json};

/// Aggregate figures over the archived sessions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ArchiveStats {
    pub total: usize,
    pub completed: usize,
    pub quick: usize,
    pub full: usize,
    /// Mean SRI total over sessions that have results.
    pub average_score: Option<f64>,
}

/// Session history: one key per session plus an index of ids.
///
/// Sessions the store refused are kept in memory and still served by
/// `get`, `list` and `stats`.
pub struct SessionArchive<S> {
    store: S,
    cache: BTreeMap<Uuid, AssessmentSession>,
}

impl<S: KeyValueStore> SessionArchive<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: BTreeMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Ids in the stored index, in insertion order. A missing or corrupt
    /// index reads as empty.
    fn index(&self) -> Vec<Uuid> {
        match load_json::<Vec<Uuid>>(&self.store, storage_keys::SESSION_INDEX) {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "session index unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Insert or replace a session.
    pub fn save(&mut self, session: &AssessmentSession) -> FlushOutcome {
        match self.write(session) {
            Ok(()) => {
                self.cache.remove(&session.id);
                tracing::info!(session_id = %session.id, completed = session.completed, "session archived");
                FlushOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!(session_id = %session.id, error = %e, "failed to archive session, keeping it in memory");
                self.cache.insert(session.id, session.clone());
                FlushOutcome::MemoryOnly(e)
            }
        }
    }

    fn write(&mut self, session: &AssessmentSession) -> Result<(), StorageError> {
        save_json(&mut self.store, &storage_keys::session(session.id), session)?;
        let mut index = self.index();
        if !index.contains(&session.id) {
            index.push(session.id);
            save_json(&mut self.store, storage_keys::SESSION_INDEX, &index)?;
        }
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<AssessmentSession> {
        if let Some(session) = self.cache.get(&id) {
            return Some(session.clone());
        }
        match load_json(&self.store, &storage_keys::session(id)) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "archived session unreadable");
                None
            }
        }
    }

    /// Every readable session, most recent start first.
    pub fn list(&self) -> Vec<AssessmentSession> {
        let mut ids = self.index();
        for id in self.cache.keys() {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }

        let mut sessions: Vec<AssessmentSession> =
            ids.into_iter().filter_map(|id| self.get(id)).collect();
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time).then(a.id.cmp(&b.id)));
        sessions
    }

    /// Remove one session. Returns whether it existed.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StorageError> {
        let cached = self.cache.remove(&id).is_some();
        let mut index = self.index();
        let indexed = index.contains(&id);

        self.store.remove(&storage_keys::session(id))?;
        if indexed {
            index.retain(|i| *i != id);
            save_json(&mut self.store, storage_keys::SESSION_INDEX, &index)?;
        }

        let existed = cached || indexed;
        if existed {
            tracing::info!(session_id = %id, "archived session deleted");
        }
        Ok(existed)
    }

    /// Remove every session. Returns how many were removed.
    pub fn clear_all(&mut self) -> Result<usize, StorageError> {
        let mut ids = self.index();
        for id in self.cache.keys() {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        self.cache.clear();

        for id in &ids {
            self.store.remove(&storage_keys::session(*id))?;
        }
        self.store.remove(storage_keys::SESSION_INDEX)?;

        tracing::info!(removed = ids.len(), "session archive cleared");
        Ok(ids.len())
    }

    pub fn stats(&self) -> ArchiveStats {
        let sessions = self.list();
        let scores: Vec<f64> = sessions
            .iter()
            .filter_map(|s| s.results.as_ref())
            .map(|r| r.sri.total_score)
            .collect();

        ArchiveStats {
            total: sessions.len(),
            completed: sessions.iter().filter(|s| s.completed).count(),
            quick: sessions
                .iter()
                .filter(|s| s.mode == AssessmentMode::Quick)
                .count(),
            full: sessions
                .iter()
                .filter(|s| s.mode == AssessmentMode::Full)
                .count(),
            average_score: (!scores.is_empty())
                .then(|| scores.iter().sum::<f64>() / scores.len() as f64),
        }
    }
}
