//! Report shapes returned by the validation workflows.

use serde::{Deserialize, Serialize};

/// Overall result of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// No errors and no warnings.
    Clean,
    /// Warnings only; the file may still be imported.
    Warnings,
    /// At least one error.
    Errors,
}

/// Errors and warnings for a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl FileReport {
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self { errors, warnings }
    }

    /// A report that stopped at a file-level problem: one error, no warnings.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        if self.has_errors() {
            Outcome::Errors
        } else if self.has_warnings() {
            Outcome::Warnings
        } else {
            Outcome::Clean
        }
    }
}

/// Result of comparing an import file against the library file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryComparison {
    pub warnings: Vec<String>,
}

impl LibraryComparison {
    pub fn has_duplicates(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Result of the duplicate scan over a revised export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisedComparison {
    pub compare_warnings: Vec<String>,
}

impl RevisedComparison {
    pub fn has_duplicates(&self) -> bool {
        !self.compare_warnings.is_empty()
    }
}

/// Rows that share one signature, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub signature: String,
    pub rows: Vec<usize>,
}

impl DuplicateGroup {
    /// Only groups with more than one row are duplicates.
    pub fn is_duplicate(&self) -> bool {
        self.rows.len() > 1
    }
}
