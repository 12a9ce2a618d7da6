use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::demographics::Demographics;
use super::response::ResponseStore;
use super::results::Results;
use crate::error::CoreError;

/// Breadth of the scale selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentMode {
    /// One short scale per dimension.
    Quick,
    /// Every applicable scale.
    Full,
}

impl AssessmentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentMode::Quick => "quick",
            AssessmentMode::Full => "full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentSession {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub mode: AssessmentMode,
    pub demographics: Demographics,
    pub responses: ResponseStore,
    pub results: Option<Results>,
    pub start_time: jiff::Timestamp,
    pub end_time: Option<jiff::Timestamp>,
    pub completed: bool,
}

impl AssessmentSession {
    pub fn new(mode: AssessmentMode, demographics: Demographics) -> Self {
        Self::started_at(mode, demographics, jiff::Timestamp::now())
    }

    pub fn started_at(
        mode: AssessmentMode,
        demographics: Demographics,
        start_time: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            demographics,
            responses: ResponseStore::new(),
            results: None,
            start_time,
            end_time: None,
            completed: false,
        }
    }

    /// Attach results and mark the session completed.
    ///
    /// A session completes exactly once; a second call is rejected.
    pub fn complete(mut self, results: Results) -> Result<Self, CoreError> {
        if self.completed {
            return Err(CoreError::AlreadyCompleted(self.id));
        }
        self.end_time = Some(results.calculated_at);
        self.results = Some(results);
        self.completed = true;
        Ok(self)
    }

    /// Minutes between start and end, if the session has ended.
    pub fn duration_minutes(&self) -> Option<i64> {
        let end = self.end_time?;
        Some(end.duration_since(self.start_time).as_secs() / 60)
    }
}
