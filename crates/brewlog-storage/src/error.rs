use thiserror::Error;
use uuid::Uuid;

use brewlog_core::error::ValidationError;

/// Failures at the S3 boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),

    #[error("S3 presign error: {0}")]
    Presign(String),
}

/// Failures at the log-store level, surfaced to a single interaction.
///
/// `Validation` is recovered locally by re-prompting; `Storage` failures are
/// shown to the user for that interaction and never retried automatically.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid submission: {0}")]
    Validation(#[from] ValidationError),

    #[error("no pairing with id {id}")]
    NotFound { id: Uuid },

    #[error("storage backend error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
