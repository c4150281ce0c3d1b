//! Print extension metadata.

use anyhow::Result;
use clap::Parser;
use options_runtime::{Extension, InMemoryHost, RuntimeOptionsExtension};

/// Print extension metadata (blocks and menus) as JSON
#[derive(Parser)]
pub struct Info {
    /// Print compact JSON on a single line
    #[arg(long)]
    compact: bool,
}

impl Info {
    pub fn execute(self) -> Result<()> {
        let info = RuntimeOptionsExtension::new(InMemoryHost::default()).info();

        let json = if self.compact {
            serde_json::to_string(&info)?
        } else {
            serde_json::to_string_pretty(&info)?
        };
        println!("{json}");

        Ok(())
    }
}
