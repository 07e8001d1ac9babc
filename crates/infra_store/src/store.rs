//! JSON document store
//!
//! A store is a single file holding a JSON array of records. Every read
//! loads the whole array and every write rewrites it, so callers sharing a
//! store across threads must serialize writes themselves.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;

/// A file containing a JSON array of records
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Opens the document at `path`, creating it as an empty array if it
    /// does not exist
    ///
    /// Missing parent directories are created too.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        if !path.exists() {
            debug!(path = %path.display(), "Creating empty store");
            fs::write(&path, "[]").map_err(|e| StoreError::io(&path, e))?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record in the document
    pub fn load<R: DeserializeOwned>(&self) -> Result<Vec<R>, StoreError> {
        let contents =
            fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        serde_json::from_str(&contents).map_err(|e| StoreError::malformed(&self.path, e))
    }

    /// Replaces the document with `records`, pretty-printed
    pub fn save<R: Serialize>(&self, records: &[R]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::malformed(&self.path, e))?;
        fs::write(&self.path, contents).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = records.len(), "Store saved");
        Ok(())
    }
}
