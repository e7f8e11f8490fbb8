//! Command implementations: load the CSV inputs, run one workflow.

use std::path::Path;

use anyhow::{Context, Result, bail};
use catalog_ingest::{IngestOptions, read_csv_table};
use catalog_model::Table;
use catalog_validate::Validator;
use tracing::{info, info_span, trace};

use crate::logging::redact_value;
use crate::types::{CheckKind, CheckResult, InputSummary, Report};

pub const IMPORT_FILE_REQUIRED: &str = "The import file is required.";
pub const LIBRARY_FILE_REQUIRED: &str = "The library file is required.";

/// Validates a catalog import file.
pub fn run_validate(
    validator: &Validator,
    file: Option<&Path>,
    options: &IngestOptions,
) -> Result<CheckResult> {
    let Some(file) = file else {
        bail!(IMPORT_FILE_REQUIRED);
    };
    let _span = info_span!("validate", path = %file.display()).entered();
    let table = load_table(file, options)?;
    let report = validator.validate_file(&table);

    Ok(CheckResult {
        check: CheckKind::Validate,
        inputs: vec![InputSummary::new("import", file, &table)],
        report: Report::File(report),
    })
}

/// Compares an import file against the library file.
pub fn run_compare(
    validator: &Validator,
    import: Option<&Path>,
    library: Option<&Path>,
    options: &IngestOptions,
) -> Result<CheckResult> {
    let Some(import) = import else {
        bail!(IMPORT_FILE_REQUIRED);
    };
    let Some(library) = library else {
        bail!(LIBRARY_FILE_REQUIRED);
    };
    let _span = info_span!(
        "compare",
        import = %import.display(),
        library = %library.display()
    )
    .entered();

    let import_table = load_table(import, options)?;
    let library_table = load_table(library, options)?;
    let comparison = validator.compare_against_library(&import_table, &library_table);

    Ok(CheckResult {
        check: CheckKind::Compare,
        inputs: vec![
            InputSummary::new("import", import, &import_table),
            InputSummary::new("library", library, &library_table),
        ],
        report: Report::Library(comparison),
    })
}

/// Validates a revised export file.
pub fn run_validate_revised(
    validator: &Validator,
    file: Option<&Path>,
    options: &IngestOptions,
) -> Result<CheckResult> {
    let Some(file) = file else {
        bail!(IMPORT_FILE_REQUIRED);
    };
    let _span = info_span!("validate_revised", path = %file.display()).entered();
    let table = load_table(file, options)?;
    let report = validator.validate_revised_file(&table);

    Ok(CheckResult {
        check: CheckKind::ValidateRevised,
        inputs: vec![InputSummary::new("revised", file, &table)],
        report: Report::File(report),
    })
}

/// Looks for duplicate rows in a revised export file.
pub fn run_compare_revised(
    validator: &Validator,
    file: Option<&Path>,
    options: &IngestOptions,
) -> Result<CheckResult> {
    let Some(file) = file else {
        bail!(IMPORT_FILE_REQUIRED);
    };
    let _span = info_span!("compare_revised", path = %file.display()).entered();
    let table = load_table(file, options)?;
    let comparison = validator.compare_revised_file(&table);

    Ok(CheckResult {
        check: CheckKind::CompareRevised,
        inputs: vec![InputSummary::new("revised", file, &table)],
        report: Report::Revised(comparison),
    })
}

fn load_table(path: &Path, options: &IngestOptions) -> Result<Table> {
    let table = read_csv_table(path, options)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "table loaded"
    );
    if let Some(row) = table.rows.first() {
        for cell in row.cells() {
            trace!(
                row = row.number(),
                column = %cell.column,
                value = %redact_value(&cell.value),
                "first row cell"
            );
        }
    }
    Ok(table)
}
