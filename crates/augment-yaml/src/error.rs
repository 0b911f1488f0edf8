//! Error types for augment-yaml

/// Result type for augment-yaml operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a YAML document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse YAML at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },
}

impl Error {
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            column,
            message: message.into(),
        }
    }
}
