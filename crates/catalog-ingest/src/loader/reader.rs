//! CSV file reading into row tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use catalog_model::{Cell, FIRST_DATA_ROW, Row, Table};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

use super::header::{decode_header, is_blank_header};

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Returns the name of a UTF-16 byte order mark at the start of `bytes`.
///
/// A UTF-8 BOM is fine; it is stripped from the first header.
pub fn detect_utf16_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xFE, ..] => Some("UTF-16 LE"),
        [0xFE, 0xFF, ..] => Some("UTF-16 BE"),
        _ => None,
    }
}

/// Reject files that start with a UTF-16 byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    ensure_supported_encoding(buffer.get(..bytes_read).unwrap_or_default(), path)
}

fn ensure_supported_encoding(bytes: &[u8], source: &Path) -> Result<()> {
    match detect_utf16_bom(bytes) {
        Some(encoding) => Err(IngestError::UnsupportedEncoding {
            path: source.to_path_buf(),
            encoding,
        }),
        None => Ok(()),
    }
}

/// Reads a CSV export from disk.
///
/// The first line is the header; data rows are numbered from 2. The whole
/// file is loaded before returning, and any malformed record aborts the read.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<Table> {
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let table = read_csv_from_reader(file, path)?;

    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded CSV"
    );
    Ok(table)
}

/// Reads a CSV export from an in-memory buffer (an uploaded file, say).
///
/// `source` names the buffer in error messages.
pub fn read_csv_bytes(bytes: &[u8], source: &Path, options: &IngestOptions) -> Result<Table> {
    if bytes.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    let size = bytes.len() as u64;
    if size > options.max_file_size {
        return Err(IngestError::FileTooLarge {
            path: source.to_path_buf(),
            size,
            max_size: options.max_file_size,
        });
    }
    ensure_supported_encoding(bytes, source)?;
    read_csv_from_reader(bytes, source)
}

/// Reads CSV records from any reader.
///
/// Cell text is decoded lossily: bytes that are not valid UTF-8 become
/// U+FFFD and surface later as encoding warnings instead of aborting.
pub fn read_csv_from_reader<R: Read>(reader: R, source: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let header_record = reader
        .byte_headers()
        .map_err(|e| parse_error(source, &e))?
        .clone();
    if header_record.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }

    let headers: Vec<String> = header_record.iter().map(decode_header).collect();
    if is_blank_header(&headers) {
        return Err(IngestError::NoHeaderDetected {
            path: source.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|e| parse_error(source, &e))?;
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| Cell {
                column: column.clone(),
                value: String::from_utf8_lossy(value).into_owned(),
            })
            .collect();
        rows.push(Row::new(FIRST_DATA_ROW + index, cells));
    }

    Ok(Table::new(headers, rows))
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn parse_error(source: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: source.to_path_buf(),
        message: error.to_string(),
    }
}
