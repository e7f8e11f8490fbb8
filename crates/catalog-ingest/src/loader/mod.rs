//! CSV loading utilities.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{
    check_file_size_with_limit, detect_utf16_bom, read_csv_bytes, read_csv_from_reader,
    read_csv_table, validate_encoding,
};
