//! Example source backed by a local JSONL file of raw records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::RawExample;
use crate::errors::ChallengeError;
use crate::source::ExampleSource;
use crate::types::SourceId;

/// Reads `{"premise", "hypothesis", "label"}` records from a JSONL file.
///
/// Blank lines are skipped; any other unparseable line is a hard failure
/// carrying the 1-based line number.
pub struct JsonlFileSource {
    source_id: SourceId,
    path: PathBuf,
}

impl JsonlFileSource {
    /// Create a source for `path`, deriving the id from the file name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let source_id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "jsonl".to_string());
        Self { source_id, path }
    }

    /// Override the derived source id.
    pub fn with_id(mut self, source_id: impl Into<SourceId>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExampleSource for JsonlFileSource {
    fn id(&self) -> &str {
        &self.source_id
    }

    fn load_train(&self) -> Result<Vec<RawExample>, ChallengeError> {
        let file = File::open(&self.path).map_err(|err| ChallengeError::SourceUnavailable {
            source_id: self.source_id.clone(),
            reason: format!("cannot open {}: {err}", self.path.display()),
        })?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: RawExample = serde_json::from_str(&line).map_err(|err| {
                ChallengeError::MalformedRecord {
                    source_id: self.source_id.clone(),
                    position: format!("line {}", idx + 1),
                    details: err.to_string(),
                }
            })?;
            records.push(record);
        }
        debug!(
            source = %self.source_id,
            records = records.len(),
            "loaded jsonl train split"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_records_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, r#"{{"premise": "p1", "hypothesis": "h1", "label": 0}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"premise": "p2", "hypothesis": "h2", "label": -1}}"#).unwrap();

        let source = JsonlFileSource::new(file.path()).with_id("fixture");
        let records = source.load_train().expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].premise, "p1");
        assert_eq!(records[1].label, -1);
    }

    #[test]
    fn malformed_line_reports_its_position() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, r#"{{"premise": "p1", "hypothesis": "h1", "label": 0}}"#).unwrap();
        writeln!(file, "this is not json").unwrap();

        let source = JsonlFileSource::new(file.path()).with_id("fixture");
        let err = source.load_train().expect_err("malformed");
        match err {
            ChallengeError::MalformedRecord { position, .. } => {
                assert_eq!(position, "line 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let source = JsonlFileSource::new("/nonexistent/snli_train.jsonl");
        let err = source.load_train().expect_err("missing file");
        assert!(matches!(err, ChallengeError::SourceUnavailable { .. }));
    }
}
