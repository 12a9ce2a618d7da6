use jiff::Timestamp;
use sri_core::config::ProgressConfig;
use sri_core::models::demographics::Demographics;
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use sri_instruments::i18n::Locale;
use sri_scoring::engine::Scorer;
use sri_storage::FlushOutcome;
use sri_storage::archive::SessionArchive;
use sri_storage::progress::ProgressTracker;
use sri_storage::store::KeyValueStore;

use crate::assessment::Assessment;
use crate::error::{AssessmentError, NotFinalized};

/// Wires an [`Assessment`] to progress auto-save and the session archive.
///
/// Every answer and page change schedules a progress save; [`tick`]
/// drives the debounce. Completion clears progress and archives the
/// finished session.
///
/// [`tick`]: Coordinator::tick
pub struct Coordinator<P, A> {
    config: ProgressConfig,
    tracker: ProgressTracker<P>,
    archive: SessionArchive<A>,
}

impl<P: KeyValueStore, A: KeyValueStore> Coordinator<P, A> {
    pub fn new(config: ProgressConfig, progress_store: P, archive_store: A) -> Self {
        Self {
            tracker: ProgressTracker::from_config(progress_store, &config),
            archive: SessionArchive::new(archive_store),
            config,
        }
    }

    pub fn tracker(&self) -> &ProgressTracker<P> {
        &self.tracker
    }

    pub fn archive(&self) -> &SessionArchive<A> {
        &self.archive
    }

    pub fn archive_mut(&mut self) -> &mut SessionArchive<A> {
        &mut self.archive
    }

    /// Resume saved progress for `mode` if there is any, otherwise begin
    /// a new assessment for `demographics`. The flag says which happened.
    pub fn start(
        &self,
        mode: AssessmentMode,
        demographics: Demographics,
        now: Timestamp,
    ) -> (Assessment, bool) {
        match self.tracker.restore(mode) {
            Some(snapshot) => (Assessment::resume(snapshot, &self.config), true),
            None => (
                Assessment::begin_at(mode, demographics, &self.config, now),
                false,
            ),
        }
    }

    pub fn answer(
        &mut self,
        assessment: &mut Assessment,
        question_id: &str,
        value: i32,
        now: Timestamp,
    ) -> Result<(), AssessmentError> {
        assessment.answer_at(question_id, value, now)?;
        self.tracker.save_at(assessment.snapshot_at(now), now);
        Ok(())
    }

    pub fn set_page(
        &mut self,
        assessment: &mut Assessment,
        page: usize,
        now: Timestamp,
    ) -> Result<(), AssessmentError> {
        assessment.set_page(page)?;
        self.tracker.save_at(assessment.snapshot_at(now), now);
        Ok(())
    }

    /// Write pending progress whose debounce window has elapsed.
    pub fn tick(&mut self, now: Timestamp) -> FlushOutcome {
        self.tracker.poll(now)
    }

    /// Write pending progress now, e.g. before the process exits.
    pub fn flush(&mut self) -> FlushOutcome {
        self.tracker.flush()
    }

    /// Finalize, then clear saved progress and archive the result.
    ///
    /// Storage failures after scoring are logged and do not fail the
    /// completion. Progress the store could not remove is hidden by the
    /// tracker, and the archived copy falls back to memory.
    pub fn complete(
        &mut self,
        assessment: Assessment,
        scorer: &Scorer,
        locale: Locale,
        now: Timestamp,
    ) -> Result<AssessmentSession, NotFinalized> {
        let session = assessment.finalize_at(scorer, locale, now)?;

        if let Err(e) = self.tracker.clear() {
            tracing::warn!(error = %e, "failed to clear saved progress after completion");
        }
        if let FlushOutcome::MemoryOnly(e) = self.archive.save(&session) {
            tracing::warn!(session_id = %session.id, error = %e, "completed session not persisted");
        }
        Ok(session)
    }

    /// Throw away saved progress without completing.
    pub fn abandon(&mut self) -> Result<(), AssessmentError> {
        self.tracker.clear()?;
        tracing::info!("saved progress abandoned");
        Ok(())
    }
}
