//! Store error types
//!
//! Failures reading or writing the backing document. Repository callers see
//! these as `RepositoryError::Storage`, with the store error as the source.

use std::path::{Path, PathBuf};

use core_kernel::RepositoryError;
use thiserror::Error;

/// Errors that can occur while reading or writing a JSON document
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be read, written, or created
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid JSON array of records
    #[error("Malformed document {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Malformed {
            path: path.into(),
            source,
        }
    }

    /// Path of the document that failed
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Io { path, .. } | StoreError::Malformed { path, .. } => path,
        }
    }
}

impl From<StoreError> for RepositoryError {
    fn from(error: StoreError) -> Self {
        let message = match &error {
            StoreError::Io { path, .. } => format!("failed to access {}", path.display()),
            StoreError::Malformed { path, .. } => {
                format!("failed to parse {}", path.display())
            }
        };
        RepositoryError::storage(message, error)
    }
}
