//! Ingestion limits.

use serde::{Deserialize, Serialize};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Environment variable for overriding the file size limit (in bytes).
pub const MAX_FILE_SIZE_ENV_VAR: &str = "CATALOG_MAX_FILE_SIZE";

/// Options for loading spreadsheet exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Files larger than this many bytes are rejected before parsing.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with `CATALOG_MAX_FILE_SIZE` applied when it holds a byte count.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(raw) = std::env::var(MAX_FILE_SIZE_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(limit) => options.max_file_size = limit,
                Err(_) => tracing::warn!(
                    variable = MAX_FILE_SIZE_ENV_VAR,
                    value = %raw,
                    "ignoring invalid file size limit"
                ),
            }
        }
        options
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit() {
        assert_eq!(IngestOptions::new().max_file_size, MAX_CSV_FILE_SIZE);
        assert_eq!(IngestOptions::new().with_max_file_size(10).max_file_size, 10);
    }
}
