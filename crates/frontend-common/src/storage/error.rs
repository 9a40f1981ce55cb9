use thiserror::Error;

/// Errors raised while touching client storage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage access failed: {0}")]
    Access(String),

    #[error("Failed to encode record: {0}")]
    Encode(String),

    #[error("Invalid user id")]
    InvalidUserId,
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
