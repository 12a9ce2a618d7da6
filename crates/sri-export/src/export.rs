use std::collections::BTreeMap;

use serde::Serialize;
use sri_core::models::demographics::Demographics;
use sri_core::models::results::Results;
use sri_core::models::session::{AssessmentMode, AssessmentSession};
use uuid::Uuid;

use crate::error::ExportError;

/// Download document for one session. Responses collapse to
/// `{questionId: value}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExport<'a> {
    pub session_id: Uuid,
    /// When the export was produced.
    pub timestamp: jiff::Timestamp,
    #[serde(rename = "type")]
    pub mode: AssessmentMode,
    pub demographics: &'a Demographics,
    pub results: Option<&'a Results>,
    pub responses: BTreeMap<String, i32>,
}

impl<'a> SessionExport<'a> {
    pub fn new(session: &'a AssessmentSession, exported_at: jiff::Timestamp) -> Self {
        Self {
            session_id: session.id,
            timestamp: exported_at,
            mode: session.mode,
            demographics: &session.demographics,
            results: session.results.as_ref(),
            responses: session.responses.values(),
        }
    }
}

pub fn export_session(session: &AssessmentSession) -> Result<String, ExportError> {
    export_session_at(session, jiff::Timestamp::now())
}

pub fn export_session_at(
    session: &AssessmentSession,
    exported_at: jiff::Timestamp,
) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&SessionExport::new(
        session,
        exported_at,
    ))?)
}

/// All sessions as a pretty-printed JSON array, in the order given.
pub fn export_all_json(sessions: &[AssessmentSession]) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(sessions)?;
    tracing::debug!(sessions = sessions.len(), "sessions exported as JSON");
    Ok(json)
}

#[derive(Debug, Serialize)]
struct CsvRow {
    id: Uuid,
    #[serde(rename = "type")]
    mode: &'static str,
    started: String,
    completed: Option<String>,
    total_score: Option<f64>,
    level: Option<&'static str>,
    sos: Option<f64>,
    guilt: Option<f64>,
    shame: Option<f64>,
    inhibition: Option<f64>,
}

impl CsvRow {
    fn from_session(session: &AssessmentSession) -> Self {
        let sri = session.results.as_ref().map(|r| &r.sri);
        let round = |v: f64| (v * 100.0).round() / 100.0;
        Self {
            id: session.id,
            mode: session.mode.as_str(),
            started: session.start_time.to_string(),
            completed: session.end_time.map(|t| t.to_string()),
            total_score: sri.map(|s| round(s.total_score)),
            level: sri.map(|s| s.level.key()),
            sos: sri.map(|s| round(s.dimension_scores.sos)),
            guilt: sri.map(|s| round(s.dimension_scores.guilt)),
            shame: sri.map(|s| round(s.dimension_scores.shame)),
            inhibition: sri.map(|s| round(s.dimension_scores.inhibition)),
        }
    }
}

/// One row per session with its scores; unscored sessions leave the score
/// columns empty.
pub fn export_all_csv(sessions: &[AssessmentSession]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if sessions.is_empty() {
        // Header only.
        writer.write_record([
            "id",
            "type",
            "started",
            "completed",
            "total_score",
            "level",
            "sos",
            "guilt",
            "shame",
            "inhibition",
        ])?;
    }
    for session in sessions {
        writer.serialize(CsvRow::from_session(session))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    tracing::debug!(sessions = sessions.len(), "sessions exported as CSV");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
