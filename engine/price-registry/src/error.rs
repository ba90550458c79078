//! Error types for the price registry

use std::path::PathBuf;
use thiserror::Error;

/// Result type for registry load operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading the price data source
///
/// All variants are fatal to the load: the registry retains no partial
/// state and the caller must abort startup or refuse to serve. Row-level
/// variants carry the 1-based line number (the header is line 1) and the
/// offending raw value so the defect can be pinpointed in the source file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("CSV file is empty")]
    Empty,

    #[error("Missing required columns: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("CSV file contains no data rows")]
    NoDataRows,

    #[error("Line {line}: Empty region value")]
    EmptyRegion { line: usize },

    #[error("Line {line}: Invalid price value '{value}'")]
    InvalidPrice { line: usize, value: String },

    #[error("Line {line}: Invalid timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },

    #[error("Line {line}: Missing field '{field}'")]
    MissingField { line: usize, field: String },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
