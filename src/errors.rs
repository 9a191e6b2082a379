use std::io;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for source, record, IO, and configuration failures.
#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("example source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error("example source '{source_id}' produced a malformed record at {position}: {details}")]
    MalformedRecord {
        source_id: SourceId,
        position: String,
        details: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
