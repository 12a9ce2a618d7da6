//! Debounced auto-save of in-progress assessments.
//!
//! [`ProgressTracker`] is a small state machine driven by explicit
//! timestamps: [`ProgressTracker::save_at`] schedules a write,
//! [`ProgressTracker::poll`] performs it once the debounce window has
//! elapsed, and [`ProgressTracker::flush`] performs it immediately. Only the
//! most recently scheduled snapshot is ever written.

use jiff::{SignedDuration, Timestamp};
use sri_core::config::ProgressConfig;
use sri_core::models::progress::ProgressSnapshot;
use sri_core::models::session::AssessmentMode;
use sri_core::storage_keys;

use crate::FlushOutcome;
use crate::error::StorageError;
use crate::store::{KeyValueStore, save_json};

#[derive(Debug, Clone)]
struct Pending {
    snapshot: ProgressSnapshot,
    scheduled_at: Timestamp,
}

pub struct ProgressTracker<S> {
    store: S,
    debounce: SignedDuration,
    pending: Option<Pending>,
    /// Last snapshot the store refused. Served by `restore` until a later
    /// write succeeds or progress is cleared.
    fallback: Option<ProgressSnapshot>,
    /// Set when `clear` could not remove the stored key. Hides the stale
    /// key from `restore` until a later write succeeds.
    cleared: bool,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S, debounce_ms: u64) -> Self {
        Self {
            store,
            debounce: SignedDuration::from_millis(i64::try_from(debounce_ms).unwrap_or(i64::MAX)),
            pending: None,
            fallback: None,
            cleared: false,
        }
    }

    pub fn from_config(store: S, config: &ProgressConfig) -> Self {
        Self::new(store, config.debounce_ms)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn save(&mut self, snapshot: ProgressSnapshot) {
        self.save_at(snapshot, Timestamp::now());
    }

    /// Schedule `snapshot` for writing. Replaces any pending snapshot and
    /// restarts the debounce window from `now`.
    pub fn save_at(&mut self, snapshot: ProgressSnapshot, now: Timestamp) {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            snapshot,
            scheduled_at: now,
        });
        tracing::debug!(replaced, "progress save scheduled");
    }

    /// Write the pending snapshot if its window has elapsed at `now`.
    pub fn poll(&mut self, now: Timestamp) -> FlushOutcome {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.duration_since(p.scheduled_at) >= self.debounce);
        if due { self.flush() } else { FlushOutcome::Idle }
    }

    /// Write the pending snapshot now, regardless of the window.
    pub fn flush(&mut self) -> FlushOutcome {
        let Some(pending) = self.pending.take() else {
            return FlushOutcome::Idle;
        };
        match save_json(&mut self.store, storage_keys::ASSESSMENT_PROGRESS, &pending.snapshot) {
            Ok(()) => {
                self.fallback = None;
                self.cleared = false;
                tracing::debug!(
                    answered = pending.snapshot.responses.len(),
                    page = pending.snapshot.current_page,
                    "progress persisted"
                );
                FlushOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist progress, keeping it in memory");
                self.fallback = Some(pending.snapshot);
                FlushOutcome::MemoryOnly(e)
            }
        }
    }

    /// Drop the pending snapshot without writing it. Returns whether one
    /// was pending.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            tracing::debug!("pending progress save cancelled");
        }
        cancelled
    }

    /// Most recent saved progress for `mode`, if any.
    ///
    /// Looks at the pending snapshot first, then the in-memory fallback,
    /// then the store. The store is skipped after a `clear` whose removal
    /// failed, until the next successful write. Snapshots of another mode, corrupt JSON, and read
    /// failures all count as no progress.
    pub fn restore(&self, mode: AssessmentMode) -> Option<ProgressSnapshot> {
        let snapshot = match (&self.pending, &self.fallback) {
            (Some(pending), _) => Some(pending.snapshot.clone()),
            (None, Some(fallback)) => Some(fallback.clone()),
            (None, None) if self.cleared => None,
            (None, None) => self.read_stored(),
        }?;

        if snapshot.mode != mode {
            tracing::debug!(
                saved = snapshot.mode.as_str(),
                requested = mode.as_str(),
                "saved progress is for another mode"
            );
            return None;
        }
        Some(snapshot)
    }

    fn read_stored(&self) -> Option<ProgressSnapshot> {
        let raw = match self.store.get(storage_keys::ASSESSMENT_PROGRESS) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved progress");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "saved progress is corrupt, ignoring it");
                None
            }
        }
    }

    /// Forget all progress: cancels the pending write, drops the fallback,
    /// and removes the stored key.
    ///
    /// If the removal fails the error is returned, but this tracker still
    /// reports no progress from then on. The stale key stays on disk for
    /// other processes.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.pending = None;
        self.fallback = None;
        if let Err(e) = self.store.remove(storage_keys::ASSESSMENT_PROGRESS) {
            tracing::warn!(error = %e, "failed to remove saved progress, hiding it in memory");
            self.cleared = true;
            return Err(e);
        }
        self.cleared = false;
        tracing::debug!("progress cleared");
        Ok(())
    }
}
