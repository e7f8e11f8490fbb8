//! Row signatures for duplicate detection.
//!
//! A signature joins the normalized values of a row's retained columns with
//! `|`, after sorting the columns by name. Sorting makes the signature
//! independent of physical column order.

use std::collections::BTreeSet;

use catalog_model::Row;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_value;

/// Separator between column contributions.
pub const SIGNATURE_DELIMITER: &str = "|";

/// How each retained column contributes to a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignatureStyle {
    /// `"{column}:{value}"`.
    #[default]
    Keyed,
    /// `"{value}"` only. Columns are still sorted by name.
    ValueOnly,
}

/// Columns left out of a signature.
///
/// A column is excluded when its name is listed, its 0-based position is
/// listed, or its name starts with one of the prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    names: BTreeSet<String>,
    positions: BTreeSet<usize>,
    prefixes: Vec<String>,
}

impl ColumnFilter {
    /// A filter that keeps every column.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.positions.insert(position);
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    /// Returns true if the column at `position` named `name` is left out.
    pub fn excludes(&self, position: usize, name: &str) -> bool {
        self.positions.contains(&position)
            || self.names.contains(name)
            || self.prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
    }
}

/// Builds the signature of a row.
pub fn build_signature(row: &Row, filter: &ColumnFilter, style: SignatureStyle) -> String {
    let mut retained: Vec<(&str, &str)> = row
        .cells()
        .iter()
        .enumerate()
        .filter(|(position, cell)| !filter.excludes(*position, &cell.column))
        .map(|(_, cell)| (cell.column.as_str(), cell.value.as_str()))
        .collect();

    // Stable, ordinal: repeated names keep their source order.
    retained.sort_by(|a, b| a.0.cmp(b.0));

    let parts: Vec<String> = retained
        .into_iter()
        .map(|(column, value)| {
            let value = normalize_value(value);
            match style {
                SignatureStyle::Keyed => format!("{column}:{value}"),
                SignatureStyle::ValueOnly => value,
            }
        })
        .collect();
    parts.join(SIGNATURE_DELIMITER)
}
