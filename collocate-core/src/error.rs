//! Core error types

use thiserror::Error;

/// Errors raised by the association and segmentation pipelines
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading from the input stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream was not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    Encoding {
        /// Byte offset in the stream where decoding failed
        position: usize,
    },

    /// The sentence break pattern is not a valid regular expression
    #[error("invalid break pattern: {0}")]
    InvalidBreakPattern(#[from] regex::Error),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_display() {
        let error = CoreError::Encoding { position: 42 };
        assert_eq!(error.to_string(), "invalid UTF-8 at byte 42");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: CoreError = io.into();
        assert!(matches!(error, CoreError::Io(_)));
        assert!(error.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let error: CoreError = regex_err.into();
        assert!(error.to_string().starts_with("invalid break pattern:"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = CoreError::InvalidConfig("chunk_size must be positive".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: chunk_size must be positive"
        );
    }
}
