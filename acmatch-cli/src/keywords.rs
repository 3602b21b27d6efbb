//! Keyword list files
//!
//! One keyword per line, optionally followed by a tab and a payload string.
//! Blank lines and lines starting with `#` are skipped.

use crate::error::CliError;
use crate::input::FileReader;
use acmatch_core::{Trie, TrieBuilder, TrieConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Automaton whose payloads are the optional payload column
pub type KeywordTrie = Trie<Option<String>>;

/// Parsed keyword file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList {
    entries: Vec<(String, Option<String>)>,
}

impl KeywordList {
    /// Load a keyword file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let source = FileReader::read_text(path)?;
        Self::parse(&source).with_context(|| format!("Invalid keyword file: {}", path.display()))
    }

    /// Parse keyword file contents
    pub fn parse(source: &str) -> Result<Self, CliError> {
        let mut entries = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let entry = match line.split_once('\t') {
                Some(("", _)) => {
                    return Err(CliError::KeywordSyntax {
                        line: index + 1,
                        reason: "payload without a keyword".to_string(),
                    })
                }
                Some((keyword, "")) => (keyword.to_string(), None),
                Some((keyword, payload)) => (keyword.to_string(), Some(payload.to_string())),
                None => (line.to_string(), None),
            };
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Number of keyword entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file held no keyword
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keyword entries in file order
    pub fn entries(&self) -> &[(String, Option<String>)] {
        &self.entries
    }

    /// Build an automaton over the keywords
    pub fn into_trie(self, config: TrieConfig) -> KeywordTrie {
        TrieBuilder::with_config(config)
            .keywords(self.entries)
            .build()
    }
}
