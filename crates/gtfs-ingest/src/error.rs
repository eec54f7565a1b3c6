//! Error types for feed ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a feed.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Feed directory not found or not a directory.
    #[error("feed directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Date cell not in `YYYYMMDD` form.
    #[error("invalid {field} value '{value}' on line {line} of {path}")]
    InvalidDate {
        field: &'static str,
        value: String,
        line: u64,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
