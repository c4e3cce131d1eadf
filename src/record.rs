use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// One benchmark run, as loaded from a single input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub title: String,
    pub data: Vec<DataPoint>,
}

/// A single implementation's timing within a run. Sequence order is
/// significant: delta labeling compares each point against the one before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub implementation: String,
    pub milliseconds: f64,
}

/// Walks `dir` and parses every entry as a run record, lazily, in
/// directory-listing order. There is no extension filtering, so a non-JSON
/// file surfaces as a parse error when the iterator reaches it.
pub fn load_run_records(
    dir: &Path,
) -> Result<impl Iterator<Item = Result<(PathBuf, RunRecord)>>> {
    let entries = fs::read_dir(dir).context(format!("Read data dir {}", dir.display()))?;
    Ok(entries.map(|entry| -> Result<(PathBuf, RunRecord)> {
        let path = entry?.path();
        let raw = fs::read_to_string(&path).context(format!("Read {}", path.display()))?;
        let record =
            serde_json::from_str(&raw).context(format!("Parse run record {}", path.display()))?;
        Ok((path, record))
    }))
}
