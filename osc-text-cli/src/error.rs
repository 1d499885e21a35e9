//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// An annotated line could not be reordered
    InvalidAnnotation {
        /// Input name (file path or `<stdin>`)
        source_name: String,
        /// 1-based line number
        line: usize,
        /// Parser message
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidAnnotation {
                source_name,
                line,
                message,
            } => write!(f, "{source_name}:{line}: {message}"),
        }
    }
}

impl std::error::Error for CliError {}

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
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown table code: xx".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown table code: xx"
        );
    }

    #[test]
    fn test_invalid_annotation_display() {
        let error = CliError::InvalidAnnotation {
            source_name: "tagged.txt".to_string(),
            line: 3,
            message: "unterminated quoted value starting at position 13".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "tagged.txt:3: unterminated quoted value starting at position 13"
        );
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("语料/测试 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 语料/测试 文件.txt");

        let error = CliError::InvalidPattern("**[!@#".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("InvalidPattern"));
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".into()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
