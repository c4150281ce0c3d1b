//! JSON-lines block scripts.
//!
//! One block call per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"opcode": "setEnabled", "args": {"thing": "turbo mode", "enabled": "true"}}
//! {"opcode": "getEnabled", "args": {"thing": "turbo mode"}}
//! ```
//!
//! `extension` defaults to the runtime options extension; `args` defaults to
//! no arguments.
use anyhow::{Context, Result};
use options_runtime::{BlockArgs, EXTENSION_ID};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    #[serde(default = "default_extension")]
    pub extension: String,
    pub opcode: String,
    #[serde(default)]
    pub args: BlockArgs,
}

fn default_extension() -> String {
    EXTENSION_ID.to_owned()
}

/// Parses one script line; `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<ScriptStep>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    serde_json::from_str(trimmed)
        .map(Some)
        .context("expected {\"opcode\": ..., \"args\": {...}}")
}
