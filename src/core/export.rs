//! JSON export of persisted lists.
//!
//! The export is a plain blob plus a deterministic filename derived from
//! the generator's identity (`saved-<slug>.json` and friends), written to
//! a directory of the caller's choosing.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::StoreError;

/// A serialized list ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Deterministic filename, e.g. `saved-writing-prompts.json`.
    pub filename: String,
    /// Indented JSON of the full list.
    pub json: String,
}

impl ExportFile {
    /// Write the blob into `dir`, creating the directory if needed.
    /// Returns the full path of the written file.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| StoreError::write_failed(dir, e))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.json).map_err(|e| StoreError::write_failed(&path, e))?;
        tracing::info!(path = %path.display(), "Exported list");
        Ok(path)
    }
}
