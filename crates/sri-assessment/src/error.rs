use sri_core::error::CoreError;
use sri_scoring::error::ScoringError;
use sri_storage::error::StorageError;
use thiserror::Error;

use crate::assessment::Assessment;
use crate::navigation::NavigationTarget;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("question '{0}' is not part of this assessment")]
    UnknownQuestion(String),

    #[error("value {value} for question '{question_id}' is outside [{min}, {max}]")]
    ValueOutOfRange {
        question_id: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("page {page} does not exist (assessment has {page_count})")]
    InvalidPage { page: usize, page_count: usize },

    #[error(
        "{missing_count} required question(s) unanswered, first is '{}' on page {}",
        target.question_id,
        target.page
    )]
    Incomplete {
        target: NavigationTarget,
        missing_count: usize,
    },

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A finalize attempt that failed. Carries the assessment back unchanged
/// so the respondent can keep answering.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct NotFinalized {
    pub assessment: Box<Assessment>,
    pub error: AssessmentError,
}

impl NotFinalized {
    pub(crate) fn new(assessment: Assessment, error: impl Into<AssessmentError>) -> Self {
        Self {
            assessment: Box::new(assessment),
            error: error.into(),
        }
    }

    pub fn into_assessment(self) -> Assessment {
        *self.assessment
    }
}
