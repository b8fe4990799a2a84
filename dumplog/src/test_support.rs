//! Test-only helpers: a capturing diagnostic sink and dump file readers.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::sink::{Diagnostic, DiagnosticSink};

/// Records every reported diagnostic in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics()
            .into_iter()
            .map(|diagnostic| diagnostic.message)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

/// Read a dump file byte-for-byte (no newline normalisation).
pub fn read_dump(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read dump {}", path.display()))
}

/// Fresh temp dir plus a path named `file_name` inside it.
pub fn scratch_file(file_name: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join(file_name);
    Ok((dir, path))
}
