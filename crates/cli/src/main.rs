//! Command-line driver for the runtime options extension.
//!
//! Runs block scripts against an in-memory host so the extension can be
//! exercised without an editor.
//!
//! # Examples
//!
//! ```bash
//! # Print extension metadata
//! runtime-options info
//!
//! # Run a JSON-lines script and dump the final host state
//! runtime-options run script.jsonl --dump
//!
//! # Same, reading the script from stdin with debug logs
//! RUST_LOG=debug runtime-options run < script.jsonl
//! ```

mod commands;
mod dirs;
mod logging;
mod script;

use anyhow::Result;
use clap::Parser;
use commands::{Info, Run};
use options_runtime::HostConfig;

/// Runtime options extension driver
#[derive(Parser)]
#[command(name = "runtime-options")]
#[command(about = "Inspect and drive the runtime options extension", long_about = None)]
#[command(version)]
struct Cli {
    /// Simulate an editor that runs extensions sandboxed
    #[arg(long, global = true)]
    sandboxed: bool,

    /// Also write logs to the platform cache directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print extension metadata (blocks and menus) as JSON
    Info(Info),

    /// Run a JSON-lines block script against an in-memory host
    Run(Run),
}

fn main() -> Result<()> {
    // Load .env file if it exists (RUNTIME_* host defaults, RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = logging::setup_logging(cli.log_file)?;

    let mut config = HostConfig::from_env();
    config.sandboxed |= cli.sandboxed;
    tracing::debug!(?config, "host configuration");

    match cli.command {
        Command::Info(cmd) => cmd.execute(),
        Command::Run(cmd) => cmd.execute(&config),
    }
}
