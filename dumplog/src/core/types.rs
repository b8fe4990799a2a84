//! Shared enums for the dumper.

use serde::{Deserialize, Serialize};

/// How the target file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate the file, creating it if missing.
    #[default]
    Overwrite,
    /// Write at the end of the file, creating it if missing.
    Append,
}

/// Terminator written after every dumped value and between sequence elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n`, the format existing tooling parses.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
    /// `\r\n` on Windows, `\n` elsewhere.
    Native,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}
