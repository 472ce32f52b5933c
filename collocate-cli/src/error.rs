//! Error handling for the CLI tools

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<collocate_core::CoreError> for CliError {
    fn from(err: collocate_core::CoreError) -> Self {
        match err {
            collocate_core::CoreError::InvalidBreakPattern(_)
            | collocate_core::CoreError::InvalidConfig(_) => CliError::ConfigError(err.to_string()),
            _ => CliError::ProcessingError(err.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use collocate_core::CoreError;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("corpus.txt".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field `maxskip`".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown field `maxskip`"
        );
    }

    #[test]
    fn test_core_error_mapping() {
        let bad_pattern = collocate_core::Segmenter::builder()
            .break_pattern("(")
            .build()
            .unwrap_err();
        let error: CliError = bad_pattern.into();
        assert!(matches!(error, CliError::ConfigError(_)));

        let error: CliError = CoreError::Encoding { position: 3 }.into();
        assert!(matches!(error, CliError::ProcessingError(_)));
        assert_eq!(
            error.to_string(),
            "Processing error: invalid UTF-8 at byte 3"
        );
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("ok".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(CliError::FileNotFound("x".to_string()).into());
        assert!(failure.unwrap_err().to_string().contains("File not found"));
    }
}
