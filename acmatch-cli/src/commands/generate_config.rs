//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let rendered = format!(
            "# acmatch configuration\n# Command-line flags override these values.\n\n{}",
            CliConfig::default().to_toml()?
        );

        match &self.output {
            Some(path) => fs::write(path, rendered)
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => print!("{rendered}"),
        }
        Ok(())
    }
}
