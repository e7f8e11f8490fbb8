//! Validation check modules.
//!
//! Each module performs one kind of check.

mod encoding;
mod header;
mod rules;

pub use encoding::{
    REPLACEMENT_SYMBOLS, contains_line_break, contains_replacement_symbols,
    row_has_replacement_symbols, unrecognized_characters_message,
};
pub use header::{HEADER_MISMATCH_MESSAGE, check_headers};
pub use rules::{check_value, row_violations, validate_row};

use serde::{Deserialize, Serialize};

/// A column rule violation. Rendered to text only when reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Required column is empty.
    RequiredMissing { column: String },
    /// Trimmed value is longer than allowed.
    TooLong { column: String, max_length: usize },
    /// Value does not parse as a decimal.
    NotNumeric { column: String },
    /// Value is not one of the allowed values.
    InvalidValue { column: String, allowed: Vec<String> },
}

impl Violation {
    /// Stable identifier of the rule that fired.
    pub fn rule_id(&self) -> &'static str {
        match self {
            Self::RequiredMissing { .. } => "required",
            Self::TooLong { .. } => "max_length",
            Self::NotNumeric { .. } => "numeric",
            Self::InvalidValue { .. } => "enum",
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Self::RequiredMissing { column }
            | Self::TooLong { column, .. }
            | Self::NotNumeric { column }
            | Self::InvalidValue { column, .. } => column,
        }
    }

    /// Message used by the catalog import report.
    pub fn message(&self) -> String {
        match self {
            Self::RequiredMissing { column } => format!("{column} is required but missing"),
            Self::TooLong { column, max_length } => {
                format!("{column} exceeds max length of {max_length} characters")
            }
            Self::NotNumeric { column } => format!("{column} must be a numeric value"),
            Self::InvalidValue { column, allowed } => format!(
                "{column} contains an invalid value. Must be one of: {}",
                allowed.join(", ")
            ),
        }
    }

    /// Per-cell message used by the revised export report.
    pub fn cell_message(&self, row: usize) -> String {
        let column = self.column();
        let detail = match self {
            Self::RequiredMissing { .. } => "Required field is empty.".to_string(),
            Self::TooLong { max_length, .. } => {
                format!("Exceeds max length of {max_length} characters.")
            }
            Self::NotNumeric { .. } => "Must be a numeric value.".to_string(),
            Self::InvalidValue { .. } => "Invalid value.".to_string(),
        };
        format!("Error in row {row}, {column}: {detail}")
    }
}
