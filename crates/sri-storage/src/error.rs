use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
