//! sri-assessment
//!
//! Session lifecycle: begin an assessment for a respondent, record
//! answers, move between pages, resume saved progress, and finalize into
//! a scored [`sri_core::models::session::AssessmentSession`].

pub mod assessment;
pub mod coordinator;
pub mod error;
pub mod navigation;
