//! acmatch CLI library
//!
//! Command-line plumbing around [`acmatch_core`]: keyword files, input
//! resolution, parallel scanning and output formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod keywords;
pub mod output;
pub mod processing;
pub mod progress;

pub use error::{CliError, CliResult};
