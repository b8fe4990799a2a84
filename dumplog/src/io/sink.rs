//! Diagnostic side channel for failed dumps.
//!
//! Failures are returned to the caller and also reported here, so a caller
//! that ignores the `Result` still leaves a trace.

use std::error::Error as _;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::error;

use crate::error::DumpError;

/// A failed dump, as reported to a [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
    /// Underlying I/O or conversion error, e.g. "Permission denied (os error 13)".
    pub cause: Option<String>,
}

impl Diagnostic {
    pub fn new(path: impl Into<PathBuf>, err: &DumpError) -> Self {
        Self {
            path: path.into(),
            message: err.to_string(),
            cause: err.source().map(ToString::to_string),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Reports through `tracing` at error level (stderr once [`logging::init`](crate::logging::init) ran).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match &diagnostic.cause {
            Some(cause) => error!(
                path = %diagnostic.path.display(),
                error = %cause,
                "{}",
                diagnostic.message
            ),
            None => error!(path = %diagnostic.path.display(), "{}", diagnostic.message),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
