use sri_core::error::CoreError;
use sri_instruments::error::InstrumentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("session incomplete: {missing_count} required question(s) unanswered, first is '{first_missing}'")]
    IncompleteSession {
        first_missing: String,
        missing_count: usize,
    },

    #[error("value {value} for question '{question_id}' is outside [{min}, {max}]")]
    ValueOutOfRange {
        question_id: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("scale '{0}' has no answered items")]
    NoAnsweredItems(String),

    #[error("score {0} cannot be classified")]
    Unclassifiable(f64),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("config error: {0}")]
    Config(#[from] CoreError),

    #[error("narrative error: {0}")]
    Narrative(#[from] NarrativeError),
}

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for NarrativeError {
    fn from(e: tera::Error) -> Self {
        NarrativeError::TemplateRender(e.to_string())
    }
}
