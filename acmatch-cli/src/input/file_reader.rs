//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads input and keyword files as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a whole file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        log::trace!("read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}
