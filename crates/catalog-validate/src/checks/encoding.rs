//! Encoding artifact checks.
//!
//! Spreadsheet exports saved with the wrong encoding show up as replacement
//! glyphs or stray control characters.

use catalog_model::Row;

/// Characters that indicate an encoding problem: U+FFFD (`�`), U+25A1
/// (`□`), U+0001 and U+00A0.
pub const REPLACEMENT_SYMBOLS: &[char] = &['\u{FFFD}', '\u{25A1}', '\u{0001}', '\u{00A0}'];

pub fn contains_replacement_symbols(value: &str) -> bool {
    value.contains(REPLACEMENT_SYMBOLS)
}

/// Returns true if any cell of the row carries a replacement symbol.
pub fn row_has_replacement_symbols(row: &Row) -> bool {
    row.cells()
        .iter()
        .any(|cell| contains_replacement_symbols(&cell.value))
}

pub fn contains_line_break(value: &str) -> bool {
    value.contains(['\r', '\n'])
}

pub fn unrecognized_characters_message(row: usize) -> String {
    format!(
        "Unrecognized characters detected in row {row}. These may be due to encoding issues (e.g., \u{FFFD}, \u{25A1}, etc.)."
    )
}
