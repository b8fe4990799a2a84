//! Dumper configuration.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::coerce::DEFAULT_PLACEHOLDER;
use crate::core::types::{LineEnding, WriteMode};

/// Dumper settings.
///
/// The crate never reads a config file itself; hosts can embed this struct
/// in their own TOML and hand the parsed value to [`Dumper::new`](crate::io::dumper::Dumper::new).
/// Missing fields default to the format existing debug-log tooling expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DumpConfig {
    /// Text written when the value is [`Unset`](crate::LoggableValue::Unset).
    pub placeholder: String,

    /// Terminator after each record and between sequence elements.
    pub line_ending: LineEnding,

    /// Mode used by [`Dumper::dump`](crate::io::dumper::Dumper::dump).
    pub default_mode: WriteMode,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            line_ending: LineEnding::default(),
            default_mode: WriteMode::default(),
        }
    }
}

impl DumpConfig {
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(anyhow!("placeholder must be non-empty"));
        }
        if self.placeholder.contains(['\r', '\n']) {
            return Err(anyhow!("placeholder must be a single line"));
        }
        Ok(())
    }

    /// Parse and validate a TOML fragment.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: DumpConfig = toml::from_str(contents).context("parse dump config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        self.validate()?;
        let mut buf = toml::to_string_pretty(self).context("serialize dump config toml")?;
        buf.push('\n');
        Ok(buf)
    }
}
