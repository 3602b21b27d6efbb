//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod generate_config;
pub mod process;

use crate::output::OutputFormat;
use crate::processing::Mode;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report every keyword occurrence in the input files
    Scan(process::ProcessArgs),

    /// Split the input files into fragment and match tokens
    Tokenize(process::ProcessArgs),

    /// Print a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(Mode::Scan),
            Commands::Tokenize(args) => args.execute(Mode::Tokenize),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value
                            .get_help()
                            .map(ToString::to_string)
                            .unwrap_or_default();
                        println!("{:<10} {}", value.get_name(), help);
                    }
                }
            }
        }
    }
}
