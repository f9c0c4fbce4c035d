//! Loading Vega-Lite plot JSON documents.

use serde_json::Value;
use std::path::PathBuf;

use crate::error::RankRatiovizError;
use crate::io::file::InputFile;

/// Read and parse a JSON document from a plaintext or gzip-compressed file.
pub fn read_json(filepath: impl Into<PathBuf>) -> Result<Value, RankRatiovizError> {
    let reader = InputFile::new(filepath).reader()?;
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}
