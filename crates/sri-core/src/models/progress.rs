use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::demographics::Demographics;
use super::response::ResponseStore;
use super::session::AssessmentMode;

/// Everything needed to resume an unfinished assessment.
///
/// Stored as `{type, demographics, responses, currentPage, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProgressSnapshot {
    #[serde(rename = "type")]
    pub mode: AssessmentMode,
    pub demographics: Demographics,
    pub responses: ResponseStore,
    #[serde(default)]
    pub current_page: usize,
    pub timestamp: jiff::Timestamp,
}
