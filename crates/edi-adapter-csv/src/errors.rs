//! Error types for the specification-table adapter

use thiserror::Error;

/// Errors that can occur when loading a specification table
#[derive(Error, Debug)]
pub enum CsvError {
    /// CSV read error with line context
    #[error("CSV read error at line {line}: {message}")]
    Read { line: usize, message: String },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CsvError {
    /// Create a read error at a specific line
    pub fn read_at(line: usize, message: impl Into<String>) -> Self {
        Self::Read {
            line,
            message: message.into(),
        }
    }

    /// Get the line number if available
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. } if *line > 0 => Some(*line),
            Self::Read { .. } | Self::Io(_) => None,
        }
    }
}

/// Result type alias for adapter operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;
