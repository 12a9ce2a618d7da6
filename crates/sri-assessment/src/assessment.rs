use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use sri_core::config::ProgressConfig;
use sri_core::models::demographics::Demographics;
use sri_core::models::progress::ProgressSnapshot;
use sri_core::models::response::{Response, ResponseStore};
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use sri_instruments::i18n::Locale;
use sri_instruments::item::Question;
use sri_instruments::selector::{select_scales, selected_questions};
use sri_scoring::engine::Scorer;
use ts_rs::TS;

use crate::error::{AssessmentError, NotFinalized};
use crate::navigation::{self, NavigationTarget};

/// Answer counts for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProgressStats {
    pub total: usize,
    pub answered: usize,
    pub unanswered: usize,
    pub required_unanswered: usize,
}

/// An in-progress assessment: the session plus its fixed question list.
///
/// The selection is computed once from `(mode, demographics)` and never
/// changes afterwards. Finalizing consumes the assessment.
#[derive(Debug)]
pub struct Assessment {
    session: AssessmentSession,
    scale_ids: Vec<&'static str>,
    questions: Vec<Question>,
    page_size: usize,
    current_page: usize,
}

impl Assessment {
    pub fn begin(mode: AssessmentMode, demographics: Demographics, config: &ProgressConfig) -> Self {
        Self::begin_at(mode, demographics, config, Timestamp::now())
    }

    pub fn begin_at(
        mode: AssessmentMode,
        demographics: Demographics,
        config: &ProgressConfig,
        now: Timestamp,
    ) -> Self {
        let assessment = Self::from_session(
            AssessmentSession::started_at(mode, demographics, now),
            config,
        );
        tracing::info!(
            session_id = %assessment.session.id,
            mode = mode.as_str(),
            questions = assessment.questions.len(),
            "assessment started"
        );
        assessment
    }

    fn from_session(session: AssessmentSession, config: &ProgressConfig) -> Self {
        let scale_ids = select_scales(&session.demographics, session.mode);
        let questions = selected_questions(&session.demographics, session.mode);
        Self {
            page_size: navigation::effective_page_size(session.mode, config.page_size),
            session,
            scale_ids,
            questions,
            current_page: 0,
        }
    }

    /// Rebuild an assessment from saved progress.
    ///
    /// Answers to questions outside the selection are dropped. The page is
    /// clamped to the last page. The start time is the earliest saved
    /// answer, or the snapshot time if there are none.
    pub fn resume(snapshot: ProgressSnapshot, config: &ProgressConfig) -> Self {
        let start_time = snapshot
            .responses
            .all()
            .iter()
            .map(|r| r.timestamp)
            .min()
            .unwrap_or(snapshot.timestamp);
        let mut assessment = Self::from_session(
            AssessmentSession::started_at(snapshot.mode, snapshot.demographics, start_time),
            config,
        );

        let mut kept = ResponseStore::new();
        let mut dropped = 0usize;
        for response in snapshot.responses.all() {
            if assessment.question(&response.question_id).is_some() {
                kept.upsert(response.clone());
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(dropped, "saved answers outside the selection were dropped");
        }
        assessment.session.responses = kept;
        assessment.current_page = snapshot.current_page.min(assessment.page_count() - 1);

        tracing::info!(
            session_id = %assessment.session.id,
            mode = snapshot.mode.as_str(),
            answered = assessment.session.responses.len(),
            page = assessment.current_page,
            "assessment resumed"
        );
        assessment
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn mode(&self) -> AssessmentMode {
        self.session.mode
    }

    pub fn scale_ids(&self) -> &[&'static str] {
        &self.scale_ids
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn answer(&mut self, question_id: &str, value: i32) -> Result<(), AssessmentError> {
        self.answer_at(question_id, value, Timestamp::now())
    }

    /// Record or replace an answer. The question must belong to the
    /// selection and the value must be one of its options.
    pub fn answer_at(
        &mut self,
        question_id: &str,
        value: i32,
        at: Timestamp,
    ) -> Result<(), AssessmentError> {
        let question = self
            .question(question_id)
            .ok_or_else(|| AssessmentError::UnknownQuestion(question_id.to_string()))?;
        if !question.accepts(value) {
            return Err(AssessmentError::ValueOutOfRange {
                question_id: question_id.to_string(),
                value,
                min: question.min_value(),
                max: question.max_value(),
            });
        }
        self.session
            .responses
            .upsert(Response::at(question_id, value, at));
        tracing::debug!(question_id, value, "answer recorded");
        Ok(())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        navigation::page_count(self.questions.len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_page(&mut self, page: usize) -> Result<(), AssessmentError> {
        let page_count = self.page_count();
        if page >= page_count {
            return Err(AssessmentError::InvalidPage { page, page_count });
        }
        self.current_page = page;
        Ok(())
    }

    pub fn page_questions(&self) -> &[Question] {
        navigation::page_questions(&self.questions, self.current_page, self.page_size)
    }

    pub fn stats(&self) -> ProgressStats {
        let responses = &self.session.responses;
        let answered = self
            .questions
            .iter()
            .filter(|q| responses.answered(&q.id))
            .count();
        ProgressStats {
            total: self.questions.len(),
            answered,
            unanswered: self.questions.len() - answered,
            required_unanswered: self
                .questions
                .iter()
                .filter(|q| q.required && !responses.answered(&q.id))
                .count(),
        }
    }

    pub fn first_unanswered_required(&self) -> Option<NavigationTarget> {
        navigation::first_unanswered_required(
            &self.questions,
            &self.session.responses,
            self.page_size,
        )
    }

    pub fn resume_target(&self) -> Option<NavigationTarget> {
        navigation::resume_target(&self.questions, &self.session.responses, self.page_size)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.snapshot_at(Timestamp::now())
    }

    pub fn snapshot_at(&self, now: Timestamp) -> ProgressSnapshot {
        ProgressSnapshot {
            mode: self.session.mode,
            demographics: self.session.demographics,
            responses: self.session.responses.clone(),
            current_page: self.current_page,
            timestamp: now,
        }
    }

    pub fn finalize(
        self,
        scorer: &Scorer,
        locale: Locale,
    ) -> Result<AssessmentSession, NotFinalized> {
        self.finalize_at(scorer, locale, Timestamp::now())
    }

    /// Score the session and return it completed.
    ///
    /// Fails with [`AssessmentError::Incomplete`] while any required
    /// question is unanswered; the target names the question to jump to.
    /// On failure the assessment comes back inside [`NotFinalized`].
    pub fn finalize_at(
        self,
        scorer: &Scorer,
        locale: Locale,
        now: Timestamp,
    ) -> Result<AssessmentSession, NotFinalized> {
        if let Some(target) = self.first_unanswered_required() {
            let missing_count = self.stats().required_unanswered;
            return Err(NotFinalized::new(
                self,
                AssessmentError::Incomplete {
                    target,
                    missing_count,
                },
            ));
        }

        let results = match scorer.score_at(&self.session, locale, now) {
            Ok(results) => results,
            Err(e) => return Err(NotFinalized::new(self, e)),
        };
        let total = results.sri.total_score;
        let level = results.sri.level;
        let session = match self.session.clone().complete(results) {
            Ok(session) => session,
            Err(e) => return Err(NotFinalized::new(self, e)),
        };

        tracing::info!(
            session_id = %session.id,
            total_score = total,
            level = level.key(),
            duration_minutes = session.duration_minutes(),
            "assessment finalized"
        );
        Ok(session)
    }
}
