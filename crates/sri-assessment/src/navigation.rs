//! Pagination and resume targets.
//!
//! Full mode splits the question list into pages of the configured size.
//! Quick mode is always a single page.

use serde::{Deserialize, Serialize};
use sri_core::models::response::ResponseStore;
use sri_core::models::session::AssessmentMode;
use sri_instruments::item::Question;
use ts_rs::TS;

/// Where to send the respondent: a question and the page it is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NavigationTarget {
    pub question_id: String,
    pub page: usize,
}

/// Page size actually used for `mode`.
pub fn effective_page_size(mode: AssessmentMode, configured: usize) -> usize {
    match mode {
        AssessmentMode::Quick => usize::MAX,
        AssessmentMode::Full => configured.max(1),
    }
}

/// Number of pages; at least one, even with no questions.
pub fn page_count(question_count: usize, page_size: usize) -> usize {
    question_count.div_ceil(page_size.max(1)).max(1)
}

/// Page holding the question at `index`.
pub fn page_of(index: usize, page_size: usize) -> usize {
    index / page_size.max(1)
}

/// Questions shown on `page`. Empty past the last page.
pub fn page_questions(questions: &[Question], page: usize, page_size: usize) -> &[Question] {
    let size = page_size.max(1);
    let Some(start) = page.checked_mul(size).filter(|s| *s < questions.len()) else {
        return &[];
    };
    let end = start.saturating_add(size).min(questions.len());
    &questions[start..end]
}

/// First unanswered question in presentation order, with its page.
/// `None` when every question has an answer.
pub fn resume_target(
    questions: &[Question],
    responses: &ResponseStore,
    page_size: usize,
) -> Option<NavigationTarget> {
    first_matching(questions, page_size, |q| !responses.answered(&q.id))
}

/// First required question without an answer, with its page.
pub fn first_unanswered_required(
    questions: &[Question],
    responses: &ResponseStore,
    page_size: usize,
) -> Option<NavigationTarget> {
    first_matching(questions, page_size, |q| {
        q.required && !responses.answered(&q.id)
    })
}

fn first_matching(
    questions: &[Question],
    page_size: usize,
    pred: impl Fn(&Question) -> bool,
) -> Option<NavigationTarget> {
    questions
        .iter()
        .position(pred)
        .map(|index| NavigationTarget {
            question_id: questions[index].id.clone(),
            page: page_of(index, page_size),
        })
}
