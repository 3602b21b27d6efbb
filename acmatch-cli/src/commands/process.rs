//! Shared implementation of `scan` and `tokenize`

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::keywords::KeywordList;
use crate::output::{create_formatter, OutputFormat};
use crate::processing::{process_files, Mode};
use crate::progress::ProgressReporter;
use acmatch_core::TrieConfig;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the scan and tokenize commands
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Keyword file: one keyword per line, optional payload after a tab
    #[arg(short, long, value_name = "FILE")]
    pub keywords: PathBuf,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Ignore letter case when matching
    #[arg(long)]
    pub case_insensitive: bool,

    /// Only report matches not touching a letter on either side
    #[arg(long)]
    pub whole_words: bool,

    /// Keep a longest-first non-overlapping subset of matches
    #[arg(long)]
    pub no_overlaps: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ACMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: all cores)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings once flags and config file are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Automaton policies
    pub matching: TrieConfig,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
    /// Worker threads, never zero
    pub threads: usize,
}

impl ProcessArgs {
    /// Execute the command in the given mode
    pub fn execute(&self, mode: Mode) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        log::debug!("Settings: {:?}", settings);

        let keywords = KeywordList::load(&self.keywords)?;
        if keywords.is_empty() {
            log::warn!("keyword file {} lists no keywords", self.keywords.display());
        }
        let trie = keywords.into_trie(settings.matching);
        log::info!(
            "built automaton: {} keywords, {} states",
            trie.len(),
            trie.state_count()
        );

        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        let reports = process_files(&trie, &files, mode, settings.threads, &progress)?;
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter =
            create_formatter(settings.format, writer, settings.pretty_json, files.len() > 1);
        for report in &reports {
            formatter.write_report(report)?;
        }
        formatter.finish()
    }

    /// Merge command-line flags over the config file
    pub fn settings(&self, config: &CliConfig) -> Result<Settings, CliError> {
        let mut matching = config.matching;
        matching.case_insensitive |= self.case_insensitive;
        matching.only_whole_words |= self.whole_words;
        if self.no_overlaps {
            matching.allow_overlaps = false;
        }

        let format = match self.format {
            Some(format) => format,
            None => <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true)
                .map_err(|_| {
                    CliError::ConfigError(format!(
                        "unknown output format: {}",
                        config.output.default_format
                    ))
                })?,
        };

        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        Ok(Settings {
            matching,
            format,
            pretty_json: config.output.pretty_json,
            threads,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
