//! Output formatting module

use acmatch_core::{Match, Token};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per match or token
    Text,
    /// JSON array with one object per input file
    Json,
    /// Markdown list per input file
    Markdown,
}

/// A keyword occurrence, detached from the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// First symbol position
    pub start: usize,
    /// Last symbol position, inclusive
    pub end: usize,
    /// Keyword as listed in the keyword file
    pub keyword: String,
    /// Matched text in its original case
    pub text: String,
    /// Payload column of the keyword file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl MatchRecord {
    /// Capture a match together with the text it covers
    pub fn new(matched: &Match<'_, Option<String>>, text: &str) -> Self {
        Self {
            start: matched.start(),
            end: matched.end(),
            keyword: matched.keyword().to_string(),
            text: text.to_string(),
            payload: matched.payload().clone(),
        }
    }
}

/// One token of a tokenized file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TokenRecord {
    /// Unmatched text
    Fragment {
        /// Covered text
        text: String,
    },
    /// Matched text
    Match(MatchRecord),
}

impl TokenRecord {
    /// Covered text
    pub fn text(&self) -> &str {
        match self {
            TokenRecord::Fragment { text } => text,
            TokenRecord::Match(record) => &record.text,
        }
    }
}

impl From<&Token<'_, '_, Option<String>>> for TokenRecord {
    fn from(token: &Token<'_, '_, Option<String>>) -> Self {
        match token.matched() {
            Some(matched) => TokenRecord::Match(MatchRecord::new(matched, token.text())),
            None => TokenRecord::Fragment {
                text: token.text().to_string(),
            },
        }
    }
}

/// Results for one input, in either shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Report {
    /// Output of `scan`
    Matches(Vec<MatchRecord>),
    /// Output of `tokenize`
    Tokens(Vec<TokenRecord>),
}

impl Report {
    /// Number of matches or tokens
    pub fn len(&self) -> usize {
        match self {
            Report::Matches(records) => records.len(),
            Report::Tokens(records) => records.len(),
        }
    }

    /// Whether the report holds nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Results for one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Input path as displayed to the user
    pub path: String,
    /// Matches or tokens
    #[serde(flatten)]
    pub report: Report,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Write the results for one file
    fn write_report(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Pick a formatter for `format`
///
/// `with_headers` makes the text formatter label each file's block.
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
    with_headers: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, with_headers)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
