//! Line-delimited JSON output for the final selection.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::data::Example;
use crate::errors::ChallengeError;

/// Write the selection to `path` as JSONL, one example per line.
///
/// Any existing file at `path` is truncated first. Each line is a single
/// `{"premise", "hypothesis", "label"}` object with the label as an integer
/// in {0, 1, 2}. The writer is flushed before returning, and runs only after
/// the full selection has been computed, so a failure here is the only way a
/// partial file can exist.
pub fn write_jsonl(path: &Path, selection: &[Example]) -> Result<(), ChallengeError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for example in selection {
        serde_json::to_writer(&mut writer, example)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    info!(path = %path.display(), lines = selection.len(), "wrote challenge set");
    Ok(())
}
