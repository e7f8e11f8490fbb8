//! Error types for catalog data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// File-level failures. Any of these aborts the whole operation.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte order mark we cannot read.
    #[error("unsupported encoding {encoding} in {path} (save the file as UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// CSV file is empty.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row has no usable column names.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

impl IngestError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::UnsupportedEncoding { path, .. }
            | Self::EmptyCsv { path }
            | Self::NoHeaderDetected { path }
            | Self::CsvParse { path, .. } => path,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/items.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/items.csv");
    }

    #[test]
    fn test_error_path() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("library.csv"),
            message: "found record with 3 fields".to_string(),
        };
        assert_eq!(err.path(), &PathBuf::from("library.csv"));
    }
}
