//! Import file vs. library file comparison.

use catalog_model::{Row, Table};
use catalog_validate::{
    ColumnFilter, SignatureStyle, build_signature, compare_against_library,
};

fn library() -> Table {
    Table::from_records(
        ["LibraryId", "ItemName", "UnitOfMeasure", "UnitCost1"],
        vec![
            vec!["L-001", "Brick", "each", "4.5"],
            vec!["L-002", "Tile", "sq ft", "2"],
            vec!["L-003", "Gravel", "cu yd", "31"],
        ],
    )
}

fn import(records: Vec<[&str; 3]>) -> Table {
    Table::from_records(["ItemName", "UnitOfMeasure", "UnitCost1"], records)
}

#[test]
fn test_library_rows_differing_in_first_column_share_a_signature() {
    let filter = ColumnFilter::new().with_position(0);
    let a = Row::from_pairs(2, [("LibraryId", "L-001"), ("ItemName", "Brick")]);
    let b = Row::from_pairs(3, [("LibraryId", "L-999"), ("ItemName", "Brick")]);
    assert_eq!(
        build_signature(&a, &filter, SignatureStyle::Keyed),
        build_signature(&b, &filter, SignatureStyle::Keyed)
    );
}

#[test]
fn test_matching_import_row_is_reported() {
    let import = import(vec![
        ["Stone", "each", "9"],
        ["Marble", "each", "12"],
        ["Brick", "each", "4.50"],
    ]);
    let comparison = compare_against_library(&import, &library());
    assert_eq!(
        comparison.warnings,
        vec![
            "The items in row 4 from the import spreadsheet are already contained in your Library Spreadsheet. Uploading will duplicate these items."
        ]
    );
}

#[test]
fn test_all_matches_share_one_message() {
    let import = import(vec![
        ["Tile", "SQ FT", "2"],
        ["Tile", "sq ft", "2.00"],
        ["Gravel", "cu yd", "31"],
        ["Sand", "cu yd", "20"],
        ["Brick", "each", "4.5"],
    ]);
    let comparison = compare_against_library(&import, &library());
    assert_eq!(comparison.warnings.len(), 1);
    assert_eq!(
        comparison.warnings[0],
        "The items in rows 3-4, row 6 from the import spreadsheet are already contained in your Library Spreadsheet. Uploading will duplicate these items."
    );
}

#[test]
fn test_no_match_no_warning() {
    let import = import(vec![["Stone", "each", "9"]]);
    let comparison = compare_against_library(&import, &library());
    assert!(comparison.warnings.is_empty());
    assert!(!comparison.has_duplicates());
}

#[test]
fn test_folder_columns_are_ignored_on_both_sides() {
    let library = Table::from_records(
        ["LibraryId", "ItemName", "FolderLevel1"],
        vec![vec!["L-1", "Brick", "Walls"]],
    );
    let import = Table::from_records(
        ["ItemName", "FolderLevel1"],
        vec![vec!["Brick", "Imported"]],
    );
    let comparison = compare_against_library(&import, &library);
    assert_eq!(comparison.warnings.len(), 1);
}

#[test]
fn test_import_first_column_is_not_dropped() {
    let library = Table::from_records(["LibraryId", "ItemName"], vec![vec!["L-1", "Brick"]]);
    let import = Table::from_records(["LibraryId", "ItemName"], vec![vec!["L-1", "Brick"]]);
    assert!(compare_against_library(&import, &library).warnings.is_empty());
}
