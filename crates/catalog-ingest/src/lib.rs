//! Catalog data ingestion.
//!
//! Loads spreadsheet exports (CSV) into [`catalog_model::Table`]s: one
//! ordered header plus data rows numbered from 2. Every failure here is
//! file-level and aborts the operation; row-level problems are left to the
//! validation crate.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::{IngestOptions, read_csv_table};
//!
//! let table = read_csv_table(Path::new("items.csv"), &IngestOptions::from_env())?;
//! println!("{} rows", table.row_count());
//! ```

mod error;
mod loader;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{IngestOptions, MAX_CSV_FILE_SIZE, MAX_FILE_SIZE_ENV_VAR};

// === CSV Reading ===
pub use loader::{
    check_file_size_with_limit, detect_utf16_bom, normalize_header, read_csv_bytes,
    read_csv_from_reader, read_csv_table, validate_encoding,
};
