use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("session {0} has no results")]
    NotScored(uuid::Uuid),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}

/// Why a share token was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("token does not have the form sri1.<payload>.<checksum>")]
    Malformed,

    #[error("unsupported token version '{0}'")]
    UnsupportedVersion(String),

    #[error("token is not valid base64url")]
    Encoding,

    #[error("checksum mismatch")]
    Checksum,

    #[error("payload is not a valid summary: {0}")]
    Payload(String),

    #[error("score out of range: {0}")]
    OutOfRange(String),

    #[error("level '{level}' does not match total score {total_score}")]
    LevelMismatch { level: String, total_score: String },
}
