//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific failures
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),

    /// No input file matched any pattern
    #[error("No files found matching the provided patterns")]
    NoInputFiles,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Malformed keyword file line
    #[error("Keyword file line {line}: {reason}")]
    KeywordSyntax {
        /// One-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_keyword_syntax_error_display() {
        let error = CliError::KeywordSyntax {
            line: 7,
            reason: "empty keyword".to_string(),
        };
        assert_eq!(error.to_string(), "Keyword file line 7: empty keyword");
    }

    #[test]
    fn test_errors_convert_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::NoInputFiles.into());
        let error = failure.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(
            error.to_string(),
            "No files found matching the provided patterns"
        );
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }
}
