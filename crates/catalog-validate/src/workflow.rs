//! The four file-level operations.
//!
//! Each call takes complete tables and returns a full report; nothing is
//! kept between calls.

use catalog_model::{
    FOLDER_COLUMNS, FOLDER_PREFIX, FileReport, HeaderSchema, LibraryComparison, RevisedComparison,
    Row, RuleTable, Table, ValidationMessage,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::checks::{
    check_headers, check_value, contains_line_break, contains_replacement_symbols,
    row_has_replacement_symbols, unrecognized_characters_message, validate_row,
};
use crate::duplicates::{
    LibraryIndex, library_warning, revised_duplicate_warnings, within_file_warnings,
};
use crate::messages::MessageBook;

/// Rule tables and column sets used by the workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Rules for the primary catalog import.
    pub catalog_rules: RuleTable,
    /// Per-cell rules for the revised export.
    pub revised_rules: RuleTable,
    /// Exact header layout of the revised export.
    pub revised_headers: HeaderSchema,
    /// Folder columns left out of catalog and library signatures.
    pub folder_columns: Vec<String>,
    /// Prefix of the folder columns left out of revised signatures.
    pub folder_prefix: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            catalog_rules: RuleTable::catalog(),
            revised_rules: RuleTable::revised(),
            revised_headers: HeaderSchema::revised(),
            folder_columns: FOLDER_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            folder_prefix: FOLDER_PREFIX.to_string(),
        }
    }
}

/// Validation context.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Rule checks, encoding warnings and same-file duplicates for a catalog
    /// import.
    pub fn validate_file(&self, table: &Table) -> FileReport {
        let _span = info_span!("validate_file", rows = table.row_count()).entered();

        let mut errors = MessageBook::errors();
        let mut encoding = MessageBook::warnings();
        for row in &table.rows {
            errors.extend(validate_row(row, &self.config.catalog_rules));
            if row_has_replacement_symbols(row) {
                encoding.push(ValidationMessage::warning(
                    unrecognized_characters_message(row.number()),
                    row.number(),
                ));
            }
        }

        let duplicates = within_file_warnings(&table.rows, &self.config.folder_columns);
        debug!(
            error_messages = errors.len(),
            encoding_warnings = encoding.len(),
            duplicate_groups = duplicates.len(),
            "row checks complete"
        );

        let mut warnings = encoding.render();
        warnings.extend(duplicates);
        let report = FileReport::new(errors.render(), warnings);
        info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "file validated"
        );
        report
    }

    /// Flags import rows that already exist in the library file.
    pub fn compare_against_library(&self, import: &Table, library: &Table) -> LibraryComparison {
        let _span = info_span!(
            "compare_against_library",
            import_rows = import.row_count(),
            library_rows = library.row_count()
        )
        .entered();

        let index = LibraryIndex::build(&library.rows, &self.config.folder_columns);
        let matches = index.matching_rows(&import.rows);
        info!(duplicates = matches.len(), "comparison completed");

        LibraryComparison {
            warnings: library_warning(&matches).into_iter().collect(),
        }
    }

    /// Header layout check, then per-cell checks on every row of a revised
    /// export. A header mismatch stops before any row is looked at.
    pub fn validate_revised_file(&self, table: &Table) -> FileReport {
        let _span = info_span!("validate_revised_file", rows = table.row_count()).entered();

        if let Some(message) = check_headers(&table.headers, &self.config.revised_headers) {
            warn!(columns = table.headers.len(), "revised export header mismatch");
            return FileReport::fatal(message);
        }

        let errors: Vec<String> = table
            .rows
            .iter()
            .flat_map(|row| self.revised_row_errors(row))
            .collect();
        info!(errors = errors.len(), "revised file validated");
        FileReport::new(errors, Vec::new())
    }

    /// Same-file duplicates of a revised export, one message per group.
    pub fn compare_revised_file(&self, table: &Table) -> RevisedComparison {
        let _span = info_span!("compare_revised_file", rows = table.row_count()).entered();

        let compare_warnings = revised_duplicate_warnings(&table.rows, &self.config.folder_prefix);
        info!(duplicate_groups = compare_warnings.len(), "revised comparison completed");
        RevisedComparison { compare_warnings }
    }

    /// Cells in column order; per cell the column rule, then line breaks,
    /// then replacement symbols.
    fn revised_row_errors(&self, row: &Row) -> Vec<String> {
        let rules = &self.config.revised_rules;
        let number = row.number();
        let mut errors = Vec::new();
        for cell in row.cells() {
            for rule in rules.for_column(&cell.column) {
                if let Some(violation) = check_value(rule, &cell.value, rules.empty_values()) {
                    errors.push(violation.cell_message(number));
                }
            }
            let value = cell.value.trim();
            if contains_line_break(value) {
                errors.push(format!(
                    "Error in row {number}, {}: Contains carriage returns.",
                    cell.column
                ));
            }
            if contains_replacement_symbols(value) {
                errors.push(format!(
                    "Error in row {number}, {}: Contains replacement symbols.",
                    cell.column
                ));
            }
        }
        errors
    }
}

/// [`Validator::validate_file`] with the default configuration.
pub fn validate_file(table: &Table) -> FileReport {
    Validator::default().validate_file(table)
}

/// [`Validator::compare_against_library`] with the default configuration.
pub fn compare_against_library(import: &Table, library: &Table) -> LibraryComparison {
    Validator::default().compare_against_library(import, library)
}

/// [`Validator::validate_revised_file`] with the default configuration.
pub fn validate_revised_file(table: &Table) -> FileReport {
    Validator::default().validate_revised_file(table)
}

/// [`Validator::compare_revised_file`] with the default configuration.
pub fn compare_revised_file(table: &Table) -> RevisedComparison {
    Validator::default().compare_revised_file(table)
}
