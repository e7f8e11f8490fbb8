//! End-to-end command runs over CSV files on disk.

use std::io::Write;
use std::path::Path;

use catalog_cli::commands::{
    IMPORT_FILE_REQUIRED, LIBRARY_FILE_REQUIRED, run_compare, run_compare_revised, run_validate,
    run_validate_revised,
};
use catalog_cli::summary::{TableStyling, render_json, render_messages, render_rules, render_summary};
use catalog_ingest::IngestOptions;
use catalog_model::REVISED_HEADERS;
use catalog_validate::Validator;
use insta::{assert_json_snapshot, assert_snapshot};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const CATALOG_HEADER: &str =
    "ItemName,PurchaseUnit,UnitOfMeasure,CoverageRatePurchase,CostType1,UnitCost1,FolderLevel1\n";

fn catalog_csv(rows: &[&str]) -> NamedTempFile {
    let mut content = CATALOG_HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    write_csv(&content)
}

#[test]
fn test_validate_report() {
    let file = catalog_csv(&[
        "Brick,pallet,each,1,Material,4.50,Walls",
        ",pallet,each,1,Material,4.50,Walls",
        "Tile,box,sqft,1,Material,2,Floors",
        "Brick,pallet,each,1.0,Material,4.5,Floors",
    ]);
    let result = run_validate(
        &Validator::default(),
        Some(file.path()),
        &IngestOptions::default(),
    )
    .unwrap();

    assert!(result.has_errors());
    assert_eq!(result.inputs[0].rows, 4);
    assert_json_snapshot!(result.report, @r###"
    {
      "errors": [
        "Error: ItemName is required but missing. Location: row 3",
        "Error: UnitOfMeasure contains an invalid value. Must be one of: sq ft, lin ft, cu yd, m, sq m, cu m, each. Location: row 4"
      ],
      "warnings": [
        "The data in row 2, row 5 represent the same item. Are you sure you want to import duplicates of this item?"
      ]
    }
    "###);
}

#[test]
fn test_clean_file_text_output() {
    let file = catalog_csv(&["Brick,pallet,each,1,Material,4.50,Walls"]);
    let result = run_validate(
        &Validator::default(),
        Some(file.path()),
        &IngestOptions::default(),
    )
    .unwrap();

    assert!(!result.has_errors());
    assert_snapshot!(render_messages(&result), @"No issues found.");
    let text = render_summary(&result, TableStyling::Never);
    assert!(text.starts_with("Catalog validation\n"));
    assert!(text.contains("import"));
    assert!(text.ends_with("No issues found."));
}

#[test]
fn test_compare_against_library() {
    let import = write_csv("ItemName,UnitCost1\nStone,9\nMarble,12\nBrick,4.50\n");
    let library = write_csv("LibraryId,ItemName,UnitCost1\nL-1,Brick,4.5\nL-2,Tile,2\n");
    let result = run_compare(
        &Validator::default(),
        Some(import.path()),
        Some(library.path()),
        &IngestOptions::default(),
    )
    .unwrap();

    assert!(!result.has_errors());
    assert_eq!(result.inputs.len(), 2);
    assert_snapshot!(render_messages(&result), @r###"
    Warnings:
    - The items in row 4 from the import spreadsheet are already contained in your Library Spreadsheet. Uploading will duplicate these items.
    "###);
}

#[test]
fn test_compare_requires_both_files() {
    let library = write_csv("LibraryId,ItemName\nL-1,Brick\n");
    let validator = Validator::default();
    let options = IngestOptions::default();

    let err = run_compare(&validator, None, Some(library.path()), &options).unwrap_err();
    assert_eq!(err.to_string(), IMPORT_FILE_REQUIRED);

    let err = run_compare(&validator, Some(library.path()), None, &options).unwrap_err();
    assert_eq!(err.to_string(), LIBRARY_FILE_REQUIRED);
    assert_eq!(LIBRARY_FILE_REQUIRED, "The library file is required.");
}

#[test]
fn test_missing_file_is_fatal() {
    let err = run_validate(
        &Validator::default(),
        Some(Path::new("/nonexistent/items.csv")),
        &IngestOptions::default(),
    )
    .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("failed to load /nonexistent/items.csv"));
    assert!(message.contains("CSV file not found"));
}

#[test]
fn test_file_size_limit() {
    let file = catalog_csv(&["Brick,pallet,each,1,Material,4.50,Walls"]);
    let err = run_validate(
        &Validator::default(),
        Some(file.path()),
        &IngestOptions::default().with_max_file_size(10),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("byte limit"));
}

#[test]
fn test_revised_header_mismatch_json() {
    let file = write_csv("ExportId,ItemName\nE-1,Brick\n");
    let result = run_validate_revised(
        &Validator::default(),
        Some(file.path()),
        &IngestOptions::default(),
    )
    .unwrap();

    assert_eq!(
        render_json(&result).unwrap(),
        "{\n  \"errors\": [\n    \"The column headers in the first row do not match the expected format.\"\n  ],\n  \"warnings\": []\n}"
    );
}

#[test]
fn test_revised_duplicates_json() {
    let header = REVISED_HEADERS.join(",");
    let blank_tail = ",".repeat(REVISED_HEADERS.len() - 3);
    let content = format!(
        "{header}\nE-1,Brick,{blank_tail}\nE-1,Brick,{blank_tail}\nE-2,Tile,{blank_tail}\n"
    );
    let file = write_csv(&content);
    let result = run_compare_revised(
        &Validator::default(),
        Some(file.path()),
        &IngestOptions::default(),
    )
    .unwrap();

    assert_json_snapshot!(result.report, @r###"
    {
      "compareWarnings": [
        "Duplicate rows: 2, 3."
      ]
    }
    "###);
}

#[test]
fn test_rules_listing() {
    let text = render_rules(Validator::default().config(), TableStyling::Never);
    assert!(text.starts_with("Catalog import rules\n"));
    assert!(text.contains("at most 120 characters"));
    assert!(text.contains("ExternalId"));
    assert!(text.ends_with(
        "Ignored by duplicate checks: FolderLevel1, FolderLevel2, FolderLevel3, FolderLevel4 (catalog), Folder* (revised)"
    ));
}
