//! acmatch command-line entry point

use acmatch_cli::commands::Commands;
use anyhow::Result;
use clap::Parser;

/// Multi-keyword scanning and tokenization over text files
#[derive(Debug, Parser)]
#[command(name = "acmatch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
