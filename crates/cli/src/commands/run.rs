//! Run a block script against an in-memory host.

use anyhow::{Context, Result};
use clap::Parser;
use options_runtime::{
    ExtensionRegistry, HostConfig, InMemoryHost, RuntimeOptionsExtension, SharedHost,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::script::parse_line;

/// Run a JSON-lines block script against an in-memory host
#[derive(Parser)]
pub struct Run {
    /// Script file, one JSON block call per line (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Print the final host state as JSON
    #[arg(long)]
    dump: bool,
}

impl Run {
    pub fn execute(self, config: &HostConfig) -> Result<()> {
        let host = SharedHost::new(InMemoryHost::from_config(config));
        let mut registry = ExtensionRegistry::new(config.sandboxed);
        registry
            .register(RuntimeOptionsExtension::new(host.clone()))
            .context("Failed to load runtime options extension")?;

        let input: Box<dyn BufRead> = match &self.script {
            Some(path) => open_script(path)?,
            None => Box::new(io::stdin().lock()),
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_script(&mut registry, input, &mut out)?;

        if self.dump {
            let snapshot = host.lock().snapshot();
            writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
        }

        Ok(())
    }
}

fn open_script(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open script: {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Executes every step, writing one line per non-empty block output.
///
/// Stops at the first malformed line or routing error. Returns the number
/// of executed steps.
pub fn run_script(
    registry: &mut ExtensionRegistry,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<usize> {
    let mut executed = 0;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {line_no}"))?;

        let Some(step) = parse_line(&line).with_context(|| format!("Malformed line {line_no}"))?
        else {
            continue;
        };

        let output = registry
            .call(&step.extension, &step.opcode, &step.args)
            .with_context(|| format!("Line {line_no} failed"))?;
        executed += 1;

        if !output.is_empty() {
            writeln!(out, "{output}")?;
        }
    }

    info!(executed, "script finished");
    Ok(executed)
}
