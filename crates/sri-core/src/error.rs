use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u64, supported: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("session {0} is already completed")]
    AlreadyCompleted(Uuid),
}
