//! Example source interfaces and built-in sources.
//!
//! Ownership model:
//! - `ExampleSource` is the pipeline-facing interface that supplies the raw
//!   train split in one call.
//! - Sources own their transport (memory, local JSONL file, Hugging Face
//!   hub) and surface failures as `ChallengeError`; they do not interpret
//!   labels beyond carrying the raw wire value through.

use crate::data::RawExample;
use crate::errors::ChallengeError;
use crate::types::SourceId;

/// Local JSONL-backed source.
pub mod jsonl;
#[cfg(feature = "huggingface")]
/// Hugging Face hub source (parquet shards).
pub mod huggingface;

pub use jsonl::JsonlFileSource;
#[cfg(feature = "huggingface")]
pub use huggingface::{SnliHubConfig, SnliHubSource};

/// Pipeline-facing example source.
///
/// For a fixed backing dataset, `load_train` output order must be stable so
/// the seeded selection downstream stays reproducible.
pub trait ExampleSource: Send + Sync {
    /// Stable source identifier used in logs and error reporting.
    fn id(&self) -> &str;

    /// Load the full train split of raw records, in source order.
    ///
    /// Records may carry the unlabeled sentinel; screening them out is the
    /// pipeline's job, not the source's.
    fn load_train(&self) -> Result<Vec<RawExample>, ChallengeError>;
}

/// Fixed in-memory source for fixtures and tests.
pub struct InMemorySource {
    source_id: SourceId,
    records: Vec<RawExample>,
}

impl InMemorySource {
    /// Wrap a fixed set of raw records under a stable id.
    pub fn new(source_id: impl Into<SourceId>, records: Vec<RawExample>) -> Self {
        Self {
            source_id: source_id.into(),
            records,
        }
    }
}

impl ExampleSource for InMemorySource {
    fn id(&self) -> &str {
        &self.source_id
    }

    fn load_train(&self) -> Result<Vec<RawExample>, ChallengeError> {
        Ok(self.records.clone())
    }
}
