//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expand input patterns into a sorted, duplicate-free list of files
///
/// Directories matched by a pattern are skipped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for entry in paths {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles.into());
    }

    files.sort();
    files.dedup();
    log::debug!("resolved {} input files", files.len());

    Ok(files)
}
