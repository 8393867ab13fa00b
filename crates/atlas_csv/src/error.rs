//! Error types for dataset file I/O.

use std::io;
use thiserror::Error;

/// Result type for dataset file operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Errors that can occur while loading or saving a dataset file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O failure reading or replacing the dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The underlying CSV parser rejected the file.
    #[error("CSV error: {0}")]
    Parse(#[from] csv::Error),

    /// The header row did not carry the expected column names.
    #[error("invalid header: expected exactly {expected:?}, found {found:?}")]
    InvalidHeader {
        /// The required column names, in order.
        expected: String,
        /// The column names found in the file.
        found: String,
    },

    /// A data row failed validation.
    #[error("line {line}: {message}")]
    InvalidRow {
        /// 1-based line number in the file (the header is line 1).
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

impl CsvError {
    /// Creates an invalid header error.
    pub fn invalid_header(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidHeader {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates an invalid row error.
    pub fn invalid_row(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_errors_carry_the_line_number() {
        let err = CsvError::invalid_row(7, "population \"abc\" is not an integer");
        assert_eq!(
            err.to_string(),
            "line 7: population \"abc\" is not an integer"
        );
    }
}
