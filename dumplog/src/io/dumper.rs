//! Writes one coerced value per call to a `.txt`/`.log` file.
//!
//! Each call runs `validate extension -> open -> coerce -> write -> close`.
//! The file handle is owned by the call and dropped on every exit path; it is
//! never cached between calls. Failures are returned and also reported to the
//! dumper's [`DiagnosticSink`].

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::core::coerce::coerce;
use crate::core::extension::check_extension;
use crate::core::types::WriteMode;
use crate::core::value::LoggableValue;
use crate::error::DumpError;
use crate::io::config::DumpConfig;
use crate::io::sink::{Diagnostic, DiagnosticSink, TracingSink};

#[derive(Debug, Clone)]
pub struct Dumper<S = TracingSink> {
    config: DumpConfig,
    sink: S,
}

impl Default for Dumper<TracingSink> {
    fn default() -> Self {
        Self {
            config: DumpConfig::default(),
            sink: TracingSink,
        }
    }
}

impl<S: DiagnosticSink> Dumper<S> {
    pub fn new(config: DumpConfig, sink: S) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config, sink })
    }

    /// Default configuration with a custom sink.
    pub fn with_sink(sink: S) -> Self {
        Self {
            config: DumpConfig::default(),
            sink,
        }
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Dump using the configured default mode (overwrite unless configured).
    pub fn dump(
        &self,
        path: impl AsRef<Path>,
        value: impl Into<LoggableValue>,
    ) -> Result<(), DumpError> {
        self.dump_with_mode(path, value, self.config.default_mode)
    }

    pub fn append(
        &self,
        path: impl AsRef<Path>,
        value: impl Into<LoggableValue>,
    ) -> Result<(), DumpError> {
        self.dump_with_mode(path, value, WriteMode::Append)
    }

    /// Write `value` and one line ending to `path`.
    ///
    /// On failure the error is reported to the sink before it is returned.
    pub fn dump_with_mode(
        &self,
        path: impl AsRef<Path>,
        value: impl Into<LoggableValue>,
        mode: WriteMode,
    ) -> Result<(), DumpError> {
        let path = path.as_ref();
        let value = value.into();
        self.write_value(path, &value, mode)
            .inspect_err(|err| self.sink.report(&Diagnostic::new(path, err)))
    }

    /// Best-effort dump: failures only reach the sink.
    pub fn dump_quietly(
        &self,
        path: impl AsRef<Path>,
        value: impl Into<LoggableValue>,
        mode: WriteMode,
    ) {
        // Already reported to the sink.
        let _ = self.dump_with_mode(path, value, mode);
    }

    #[instrument(skip_all, fields(path = %path.display(), mode = ?mode))]
    fn write_value(
        &self,
        path: &Path,
        value: &LoggableValue,
        mode: WriteMode,
    ) -> Result<(), DumpError> {
        check_extension(path)?;
        let mut file = open_target(path, mode)?;

        let line_ending = self.config.line_ending;
        let mut text = coerce(value, &self.config.placeholder, line_ending);
        text.push_str(line_ending.as_str());

        debug!(bytes = text.len(), "writing dump");
        file.write_all(text.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| DumpError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("dump written");
        Ok(())
    }
}

fn open_target(path: &Path, mode: WriteMode) -> Result<File, DumpError> {
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };
    options.open(path).map_err(|source| DumpError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Dump `value` to `path` with the default [`Dumper`].
///
/// Pass [`LoggableValue::default()`] to write the "not set" placeholder.
pub fn dump_log(
    path: impl AsRef<Path>,
    value: impl Into<LoggableValue>,
    mode: WriteMode,
) -> Result<(), DumpError> {
    Dumper::default().dump_with_mode(path, value, mode)
}

/// Like [`dump_log`], but never fails; errors are only reported via `tracing`.
pub fn dump_log_quietly(
    path: impl AsRef<Path>,
    value: impl Into<LoggableValue>,
    mode: WriteMode,
) {
    Dumper::default().dump_quietly(path, value, mode);
}
