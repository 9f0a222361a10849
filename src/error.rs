//! Error types for the prompt highlighter
//!
//! Highlighting itself is total over all input text. Errors only arise while
//! compiling the static tables, loading configuration, or doing CLI I/O.

use crate::category::Category;
use thiserror::Error;

/// Main error type for highlighter operations
#[derive(Error, Debug)]
pub enum HighlightError {
    /// A keyword alternation or structural pattern failed to compile
    #[error("Invalid {category} pattern `{pattern}`: {source}")]
    InvalidPattern {
        category: Category,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Category name not in the closed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for highlighter operations
pub type Result<T> = std::result::Result<T, HighlightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_message() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = HighlightError::InvalidPattern {
            category: Category::Camera,
            pattern: "(unclosed".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Invalid camera pattern `(unclosed`"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: HighlightError = config::ConfigError::Message("bad value".to_string()).into();
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
