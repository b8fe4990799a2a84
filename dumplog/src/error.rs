//! Error taxonomy for dump operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    /// Path does not end in `.txt` or `.log`. Raised before any file access.
    #[error("File extension should be txt or log.")]
    InvalidExtension { path: PathBuf },

    /// The target could not be opened or created. Nothing was written.
    #[error("Failed to open the file: {}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write the file: {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to convert value: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DumpError {
    /// Target path, when the error concerns one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DumpError::InvalidExtension { path }
            | DumpError::OpenFailed { path, .. }
            | DumpError::WriteFailed { path, .. } => Some(path.as_path()),
            DumpError::Serialize(_) => None,
        }
    }
}
