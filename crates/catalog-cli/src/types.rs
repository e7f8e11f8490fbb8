use std::path::{Path, PathBuf};

use catalog_model::{FileReport, LibraryComparison, RevisedComparison, Table};
use serde::Serialize;

/// The four checks the CLI can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Validate,
    Compare,
    ValidateRevised,
    CompareRevised,
}

impl CheckKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Validate => "Catalog validation",
            Self::Compare => "Library comparison",
            Self::ValidateRevised => "Revised validation",
            Self::CompareRevised => "Revised comparison",
        }
    }
}

/// Report returned by one of the workflows, serialized as-is for `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    File(FileReport),
    Library(LibraryComparison),
    Revised(RevisedComparison),
}

impl Report {
    pub fn errors(&self) -> &[String] {
        match self {
            Self::File(report) => &report.errors,
            Self::Library(_) | Self::Revised(_) => &[],
        }
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            Self::File(report) => &report.warnings,
            Self::Library(comparison) => &comparison.warnings,
            Self::Revised(comparison) => &comparison.compare_warnings,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// One CSV file that took part in a check.
#[derive(Debug, Clone)]
pub struct InputSummary {
    pub role: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

impl InputSummary {
    pub fn new(role: &'static str, path: &Path, table: &Table) -> Self {
        Self {
            role,
            path: path.to_path_buf(),
            rows: table.row_count(),
        }
    }
}

#[derive(Debug)]
pub struct CheckResult {
    pub check: CheckKind,
    /// The file the report is about comes first.
    pub inputs: Vec<InputSummary>,
    pub report: Report,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        self.report.has_errors()
    }
}
