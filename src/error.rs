//! Error types for pattern parsing and range formatting.

use thiserror::Error;

/// Errors that can occur when parsing a locale date/time pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("missing separator between date parts at position {position}")]
    MissingSeparator { position: usize },

    #[error("unterminated escape at position {position}")]
    UnterminatedEscape { position: usize },
}

/// Errors that can occur when formatting a range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("unrecognized date/time input '{input}'")]
    InvalidInput { input: String },

    #[error("timestamp {seconds} is out of range")]
    TimestampOutOfRange { seconds: i64 },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
