//! Spreadsheet rows and tables.
//!
//! A [`Row`] keeps its cells in source column order. Lookups by column name
//! return `Option` so callers always distinguish "column absent" from
//! "column present but empty".

use serde::{Deserialize, Serialize};

/// Row number of the header line. Data rows start right after it.
pub const HEADER_ROW: usize = 1;

/// Row number assigned to the first data row of a file.
pub const FIRST_DATA_ROW: usize = HEADER_ROW + 1;

/// A single cell: the column it belongs to and its raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub column: String,
    pub value: String,
}

/// One data row of a spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    number: usize,
    cells: Vec<Cell>,
}

impl Row {
    /// Creates a row from cells already in source order.
    pub fn new(number: usize, cells: Vec<Cell>) -> Self {
        Self { number, cells }
    }

    /// Creates a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(number: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let cells = pairs
            .into_iter()
            .map(|(column, value)| Cell {
                column: column.into(),
                value: value.into(),
            })
            .collect();
        Self { number, cells }
    }

    /// 1-based row number in the source file.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Cells in source column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Raw value of a column, or `None` when the column is not part of the row.
    ///
    /// When a header repeats a name, the first occurrence wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.column == column)
            .map(|cell| cell.value.as_str())
    }

    /// Returns true if the row schema contains the column.
    pub fn contains(&self, column: &str) -> bool {
        self.cells.iter().any(|cell| cell.column == column)
    }

    /// Column names in source order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.column.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A parsed spreadsheet: the header line plus its data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Builds a table from a header and raw records, numbering rows from
    /// [`FIRST_DATA_ROW`].
    ///
    /// Records shorter than the header get empty trailing cells; extra
    /// trailing values without a header are dropped.
    pub fn from_records<H, R, V>(headers: H, records: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let mut values = record.into_iter().map(Into::into);
                let cells = headers
                    .iter()
                    .map(|column| Cell {
                        column: column.clone(),
                        value: values.next().unwrap_or_default(),
                    })
                    .collect();
                Row::new(FIRST_DATA_ROW + index, cells)
            })
            .collect();
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
