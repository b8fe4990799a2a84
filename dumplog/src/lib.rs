//! Debug dumper that writes a single value to a `.txt` or `.log` file.
//!
//! The crate follows the same split as the rest of the workspace:
//!
//! - **[`core`]**: Pure, deterministic logic (value model, extension check,
//!   text coercion). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (opening and writing the target
//!   file, reporting diagnostics, configuration).
//!
//! The usual entry point is [`dump_log`]:
//!
//! ```no_run
//! use dumplog::{LoggableValue, WriteMode, dump_log};
//!
//! dump_log("debug.log", "checkpoint reached", WriteMode::Append)?;
//! dump_log("debug.log", vec!["line1", "line2"], WriteMode::Append)?;
//! dump_log("debug.log", LoggableValue::default(), WriteMode::Overwrite)?;
//! # Ok::<(), dumplog::DumpError>(())
//! ```

pub mod core;
pub mod error;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::types::{LineEnding, WriteMode};
pub use crate::core::value::LoggableValue;
pub use crate::error::DumpError;
pub use crate::io::config::DumpConfig;
pub use crate::io::dumper::{Dumper, dump_log, dump_log_quietly};
pub use crate::io::sink::{Diagnostic, DiagnosticSink, TracingSink};
