//! Duplicate detection, within one file and against a library file.

use std::collections::HashSet;

use catalog_model::{DuplicateGroup, Row};
use indexmap::IndexMap;

use crate::range::{format_ranges, format_row_list};
use crate::signature::{ColumnFilter, SignatureStyle, build_signature};

/// Groups row numbers by signature, in order of first appearance.
///
/// Every signature gets a group, including those seen only once.
pub fn group_rows(rows: &[Row], filter: &ColumnFilter, style: SignatureStyle) -> Vec<DuplicateGroup> {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for row in rows {
        groups
            .entry(build_signature(row, filter, style))
            .or_default()
            .push(row.number());
    }
    groups
        .into_iter()
        .map(|(signature, rows)| DuplicateGroup { signature, rows })
        .collect()
}

/// Groups holding more than one row.
pub fn duplicate_groups(
    rows: &[Row],
    filter: &ColumnFilter,
    style: SignatureStyle,
) -> Vec<DuplicateGroup> {
    group_rows(rows, filter, style)
        .into_iter()
        .filter(DuplicateGroup::is_duplicate)
        .collect()
}

/// Filter used for same-file and import-side signatures.
pub fn folder_filter(folder_columns: &[String]) -> ColumnFilter {
    ColumnFilter::new().with_names(folder_columns.iter().cloned())
}

/// One warning per group of rows that share a keyed signature.
pub fn within_file_warnings(rows: &[Row], folder_columns: &[String]) -> Vec<String> {
    duplicate_groups(rows, &folder_filter(folder_columns), SignatureStyle::Keyed)
        .iter()
        .map(|group| same_item_message(&group.rows))
        .collect()
}

pub fn same_item_message(rows: &[usize]) -> String {
    format!(
        "The data in {} represent the same item. Are you sure you want to import duplicates of this item?",
        format_ranges(rows.iter().copied())
    )
}

/// Signatures of every library row.
///
/// The first column of a library row is the library's own identifier, so
/// position 0 never takes part, whatever it is called.
#[derive(Debug, Clone, Default)]
pub struct LibraryIndex {
    signatures: HashSet<String>,
    import_filter: ColumnFilter,
}

impl LibraryIndex {
    pub fn build(library: &[Row], folder_columns: &[String]) -> Self {
        let import_filter = folder_filter(folder_columns);
        let library_filter = import_filter.clone().with_position(0);
        let signatures = library
            .iter()
            .map(|row| build_signature(row, &library_filter, SignatureStyle::Keyed))
            .collect();
        Self {
            signatures,
            import_filter,
        }
    }

    /// Returns true if an import row matches some library row.
    pub fn contains(&self, row: &Row) -> bool {
        self.signatures
            .contains(&build_signature(row, &self.import_filter, SignatureStyle::Keyed))
    }

    /// Row numbers of every import row already in the library, in file order.
    pub fn matching_rows(&self, import: &[Row]) -> Vec<usize> {
        import
            .iter()
            .filter(|row| self.contains(row))
            .map(Row::number)
            .collect()
    }

    /// Number of distinct library signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// The single combined warning for import rows found in the library.
pub fn library_warning(rows: &[usize]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    Some(format!(
        "The items in {} from the import spreadsheet are already contained in your Library Spreadsheet. Uploading will duplicate these items.",
        format_ranges(rows.iter().copied())
    ))
}

/// Duplicate messages for the revised export: value-only signatures, any
/// column starting with `folder_prefix` ignored, raw row lists.
pub fn revised_duplicate_warnings(rows: &[Row], folder_prefix: &str) -> Vec<String> {
    let filter = ColumnFilter::new().with_prefix(folder_prefix);
    duplicate_groups(rows, &filter, SignatureStyle::ValueOnly)
        .iter()
        .map(|group| format!("Duplicate rows: {}.", format_row_list(&group.rows)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folders() -> Vec<String> {
        vec!["FolderLevel1".to_string()]
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let rows = vec![
            Row::from_pairs(2, [("ItemName", "B")]),
            Row::from_pairs(3, [("ItemName", "A")]),
            Row::from_pairs(4, [("ItemName", "B")]),
        ];
        let groups = group_rows(&rows, &ColumnFilter::new(), SignatureStyle::Keyed);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].signature, "ItemName:B");
        assert_eq!(groups[0].rows, vec![2, 4]);
        assert_eq!(groups[1].rows, vec![3]);
    }

    #[test]
    fn test_folder_columns_do_not_separate_duplicates() {
        let rows = vec![
            Row::from_pairs(2, [("ItemName", "Brick"), ("FolderLevel1", "Walls")]),
            Row::from_pairs(3, [("ItemName", "Brick"), ("FolderLevel1", "Floors")]),
        ];
        let warnings = within_file_warnings(&rows, &folders());
        assert_eq!(
            warnings,
            vec![
                "The data in rows 2-3 represent the same item. Are you sure you want to import duplicates of this item?"
            ]
        );
    }

    #[test]
    fn test_library_index_ignores_first_library_column() {
        let library = vec![Row::from_pairs(
            2,
            [("LibraryId", "L-1"), ("ItemName", "Brick"), ("Cost", "5")],
        )];
        let index = LibraryIndex::build(&library, &folders());
        let import = Row::from_pairs(7, [("ItemName", "Brick"), ("Cost", "5.00")]);
        assert!(index.contains(&import));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_no_library_match_no_warning() {
        assert_eq!(library_warning(&[]), None);
    }
}
