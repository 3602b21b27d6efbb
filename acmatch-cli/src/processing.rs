//! Scanning input files against one shared automaton

use crate::input::FileReader;
use crate::keywords::KeywordTrie;
use crate::output::{FileReport, MatchRecord, Report, TokenRecord};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::iter;
use std::path::{Path, PathBuf};

/// What to compute for each input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report matches
    Scan,
    /// Report the token stream
    Tokenize,
}

/// Process `files` on a pool of `threads` workers
///
/// Reports come back in the order of `files`.
pub fn process_files(
    trie: &KeywordTrie,
    files: &[PathBuf],
    mode: Mode,
    threads: usize,
    progress: &ProgressReporter,
) -> Result<Vec<FileReport>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to start worker threads")?;
    log::debug!("processing {} files on {} threads", files.len(), threads);

    pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let text = FileReader::read_text(path)?;
                let report = process_text(trie, path, &text, mode);
                log::info!("{}: {} items", report.path, report.report.len());
                progress.file_completed(&report.path);
                Ok(report)
            })
            .collect()
    })
}

/// Scan or tokenize one text
pub fn process_text(trie: &KeywordTrie, path: &Path, text: &str, mode: Mode) -> FileReport {
    let report = match mode {
        Mode::Scan => {
            let offsets = symbol_offsets(text);
            Report::Matches(
                trie.find_matches(text)
                    .iter()
                    .map(|m| {
                        MatchRecord::new(m, &text[offsets[m.start()]..offsets[m.end() + 1]])
                    })
                    .collect(),
            )
        }
        Mode::Tokenize => Report::Tokens(
            trie.tokenize(text)
                .iter()
                .map(TokenRecord::from)
                .collect(),
        ),
    };

    FileReport {
        path: path.display().to_string(),
        report,
    }
}

/// Byte offset of every symbol, plus the end of the text
fn symbol_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(text.len()))
        .collect()
}
