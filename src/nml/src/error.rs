// nml/src/error.rs

//! Error types for namelist reading, patching and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for namelist operations.
pub type Result<T> = std::result::Result<T, NmlError>;

/// Errors that can occur when parsing, converting or writing namelists.
#[derive(Error, Debug)]
pub enum NmlError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid {expected} literal: '{value}'")]
    InvalidLiteral {
        value: String,
        expected: &'static str,
    },

    #[error("cannot convert {from} value '{value}' to {to}")]
    TypeMismatch {
        from: &'static str,
        to: &'static str,
        value: String,
    },

    #[error("file already exists: {0}")]
    FileExists(PathBuf),
}

impl NmlError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(message: S, line: usize) -> Self {
        NmlError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a new invalid literal error.
    pub fn invalid_literal(value: &str, expected: &'static str) -> Self {
        NmlError::InvalidLiteral {
            value: value.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NmlError::parse("unexpected token", 5);
        assert_eq!(err.to_string(), "parse error at line 5: unexpected token");

        let err = NmlError::invalid_literal("abc", "integer");
        assert_eq!(err.to_string(), "invalid integer literal: 'abc'");

        let err = NmlError::FileExists(PathBuf::from("/tmp/out.nml"));
        assert_eq!(err.to_string(), "file already exists: /tmp/out.nml");
    }
}
