//! Example source backed by the SNLI parquet export on the Hugging Face hub.
//!
//! Shards are fetched through the hub's local cache, so repeated runs only
//! download once. Rows missing any of the three expected columns are a hard
//! failure; this source does not guess at schemas.

use std::fs::File;
use std::path::PathBuf;

use hf_hub::api::sync::ApiBuilder;
use hf_hub::{Repo, RepoType};
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::Field;
use tracing::{debug, info};

use crate::constants::huggingface::{
    COLUMN_HYPOTHESIS, COLUMN_LABEL, COLUMN_PREMISE, SNLI_DATASET_ID, SNLI_TRAIN_SHARDS,
};
use crate::data::RawExample;
use crate::errors::ChallengeError;
use crate::source::ExampleSource;
use crate::types::SourceId;

/// Configuration for a hub-backed SNLI-style source.
#[derive(Clone, Debug)]
pub struct SnliHubConfig {
    /// Stable source id used in logs and error reporting.
    pub source_id: SourceId,
    /// Hub dataset repository, e.g. `stanfordnlp/snli`.
    pub dataset: String,
    /// Train-split parquet shard paths within the repository, in order.
    pub train_shards: Vec<String>,
}

impl Default for SnliHubConfig {
    fn default() -> Self {
        Self {
            source_id: "snli".to_string(),
            dataset: SNLI_DATASET_ID.to_string(),
            train_shards: SNLI_TRAIN_SHARDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Hub-backed example source decoding premise/hypothesis/label columns.
pub struct SnliHubSource {
    config: SnliHubConfig,
}

impl SnliHubSource {
    /// Create a source for the given hub configuration.
    pub fn new(config: SnliHubConfig) -> Self {
        Self { config }
    }

    fn unavailable(&self, reason: impl Into<String>) -> ChallengeError {
        ChallengeError::SourceUnavailable {
            source_id: self.config.source_id.clone(),
            reason: reason.into(),
        }
    }

    fn malformed(&self, position: String, details: impl Into<String>) -> ChallengeError {
        ChallengeError::MalformedRecord {
            source_id: self.config.source_id.clone(),
            position,
            details: details.into(),
        }
    }

    fn fetch_shard(&self, shard: &str) -> Result<PathBuf, ChallengeError> {
        let api = ApiBuilder::new()
            .with_progress(false)
            .build()
            .map_err(|err| self.unavailable(format!("hub api init failed: {err}")))?;
        let repo = api.repo(Repo::new(self.config.dataset.clone(), RepoType::Dataset));
        repo.get(shard)
            .map_err(|err| self.unavailable(format!("fetching {shard} failed: {err}")))
    }

    fn read_shard(
        &self,
        shard: &str,
        records: &mut Vec<RawExample>,
    ) -> Result<(), ChallengeError> {
        let local_path = self.fetch_shard(shard)?;
        debug!(shard, path = %local_path.display(), "reading parquet shard");

        let file = File::open(&local_path)?;
        let reader = SerializedFileReader::new(file)
            .map_err(|err| self.unavailable(format!("opening {shard} failed: {err}")))?;
        let rows = reader
            .get_row_iter(None)
            .map_err(|err| self.unavailable(format!("iterating {shard} failed: {err}")))?;

        for (row_idx, row) in rows.enumerate() {
            let position = || format!("{shard}:{row_idx}");
            let row = row.map_err(|err| self.malformed(position(), err.to_string()))?;

            let mut premise = None;
            let mut hypothesis = None;
            let mut label = None;
            for (name, field) in row.get_column_iter() {
                match name.as_str() {
                    COLUMN_PREMISE => premise = field_as_text(field),
                    COLUMN_HYPOTHESIS => hypothesis = field_as_text(field),
                    COLUMN_LABEL => label = field_as_label(field),
                    _ => {}
                }
            }

            let premise =
                premise.ok_or_else(|| self.malformed(position(), "missing premise column"))?;
            let hypothesis = hypothesis
                .ok_or_else(|| self.malformed(position(), "missing hypothesis column"))?;
            let label =
                label.ok_or_else(|| self.malformed(position(), "missing label column"))?;
            records.push(RawExample {
                premise,
                hypothesis,
                label,
            });
        }
        Ok(())
    }
}

impl ExampleSource for SnliHubSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn load_train(&self) -> Result<Vec<RawExample>, ChallengeError> {
        if self.config.train_shards.is_empty() {
            return Err(ChallengeError::Configuration(format!(
                "source '{}' has no train shards configured",
                self.config.source_id
            )));
        }
        let mut records = Vec::new();
        for shard in &self.config.train_shards {
            self.read_shard(shard, &mut records)?;
        }
        info!(
            source = %self.config.source_id,
            dataset = %self.config.dataset,
            records = records.len(),
            "loaded hub train split"
        );
        Ok(records)
    }
}

fn field_as_text(field: &Field) -> Option<String> {
    match field {
        Field::Str(value) => Some(value.clone()),
        _ => None,
    }
}

fn field_as_label(field: &Field) -> Option<i64> {
    match field {
        Field::Byte(value) => Some(i64::from(*value)),
        Field::Short(value) => Some(i64::from(*value)),
        Field::Int(value) => Some(i64::from(*value)),
        Field::Long(value) => Some(*value),
        _ => None,
    }
}
