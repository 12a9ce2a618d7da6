//! Answer files: a JSON document with the assessment type, demographics,
//! and responses.
//!
//! Responses may be a `{questionId: value}` object (the session export
//! format) or an array of `{questionId, value, timestamp}` records (the
//! stored session format), so exported files can be fed straight back in.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::Deserialize;
use sri_assessment::assessment::Assessment;
use sri_assessment::error::AssessmentError;
use sri_core::models::demographics::Demographics;
use sri_core::models::session::AssessmentMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("answer file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("answer file is missing \"{0}\"")]
    MissingField(&'static str),

    #[error("invalid \"{field}\": {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerFile {
    pub mode: AssessmentMode,
    pub demographics: Demographics,
    /// In file order.
    pub responses: Vec<(String, i32)>,
    pub current_page: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseRecord {
    question_id: String,
    value: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Responses {
    Map(BTreeMap<String, i32>),
    List(Vec<ResponseRecord>),
}

fn invalid(field: &'static str, e: serde_json::Error) -> InputError {
    InputError::InvalidField {
        field,
        message: e.to_string(),
    }
}

impl AnswerFile {
    pub fn parse(contents: &str) -> Result<Self, InputError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;

        let mode = json
            .get("type")
            .ok_or(InputError::MissingField("type"))?;
        let mode: AssessmentMode =
            serde_json::from_value(mode.clone()).map_err(|e| invalid("type", e))?;

        let demographics = json
            .get("demographics")
            .map(Demographics::from_json_lenient)
            .unwrap_or_default();

        let responses = match json.get("responses") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(raw) => match serde_json::from_value::<Responses>(raw.clone())
                .map_err(|e| invalid("responses", e))?
            {
                Responses::Map(map) => map.into_iter().collect(),
                Responses::List(list) => list
                    .into_iter()
                    .map(|r| (r.question_id, r.value))
                    .collect(),
            },
        };

        let current_page = match json.get("currentPage") {
            None | Some(serde_json::Value::Null) => None,
            Some(raw) => Some(
                serde_json::from_value::<usize>(raw.clone()).map_err(|e| invalid("currentPage", e))?,
            ),
        };

        Ok(Self {
            mode,
            demographics,
            responses,
            current_page,
        })
    }

    /// Record every response on `assessment`. Stops at the first rejected
    /// answer.
    pub fn apply(&self, assessment: &mut Assessment, at: Timestamp) -> Result<(), AssessmentError> {
        for (question_id, value) in &self.responses {
            assessment.answer_at(question_id, *value, at)?;
        }
        if let Some(page) = self.current_page {
            assessment.set_page(page)?;
        }
        Ok(())
    }
}
