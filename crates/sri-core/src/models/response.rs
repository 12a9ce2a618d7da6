use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A respondent's chosen option value for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub value: i32,
    pub timestamp: jiff::Timestamp,
}

impl Response {
    /// Create a response stamped with the current time.
    pub fn new(question_id: impl Into<String>, value: i32) -> Self {
        Self::at(question_id, value, jiff::Timestamp::now())
    }

    pub fn at(question_id: impl Into<String>, value: i32, timestamp: jiff::Timestamp) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            timestamp,
        }
    }
}

/// Ordered question-id → response mapping for one session.
///
/// At most one entry per question id. An upsert moves the entry to the
/// end, so the last element is always the most recently answered.
/// Values are stored as given; range checks belong to the caller and to
/// scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseStore(Vec<Response>);

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the response for `response.question_id`.
    pub fn upsert(&mut self, response: Response) {
        self.0.retain(|r| r.question_id != response.question_id);
        self.0.push(response);
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.0.iter().find(|r| r.question_id == question_id)
    }

    pub fn all(&self) -> &[Response] {
        &self.0
    }

    pub fn answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Plain `{question_id: value}` view, used by exports.
    pub fn values(&self) -> BTreeMap<String, i32> {
        self.0
            .iter()
            .map(|r| (r.question_id.clone(), r.value))
            .collect()
    }
}

impl From<Vec<Response>> for ResponseStore {
    /// Later duplicates win, matching repeated upserts.
    fn from(responses: Vec<Response>) -> Self {
        let mut store = Self::new();
        for response in responses {
            store.upsert(response);
        }
        store
    }
}
