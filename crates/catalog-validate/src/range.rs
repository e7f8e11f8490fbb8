//! Row-number presentation.
//!
//! Two distinct styles: compressed ranges (`"rows 2-4, row 7"`) for report
//! lines, and a raw comma-joined list (`"2, 3, 9"`) for the revised-export
//! duplicate messages.

/// Compresses row numbers into runs: `[2, 3, 4, 7]` → `"rows 2-4, row 7"`.
///
/// Input order does not matter and repeated numbers are counted once.
/// Empty input yields an empty string.
pub fn format_ranges<I>(rows: I) -> String
where
    I: IntoIterator<Item = usize>,
{
    let mut rows: Vec<usize> = rows.into_iter().collect();
    rows.sort_unstable();
    rows.dedup();

    let mut iter = rows.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut runs = Vec::new();
    let (mut start, mut end) = (first, first);
    for row in iter {
        if row == end + 1 {
            end = row;
        } else {
            runs.push(render_run(start, end));
            start = row;
            end = row;
        }
    }
    runs.push(render_run(start, end));
    runs.join(", ")
}

/// Joins row numbers as given, without sorting or compressing.
pub fn format_row_list(rows: &[usize]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_run(start: usize, end: usize) -> String {
    if start == end {
        format!("row {start}")
    } else {
        format!("rows {start}-{end}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_runs() {
        assert_eq!(
            format_ranges([2, 3, 4, 7, 9, 10]),
            "rows 2-4, row 7, rows 9-10"
        );
    }

    #[test]
    fn test_single_row() {
        assert_eq!(format_ranges([5]), "row 5");
    }

    #[test]
    fn test_unsorted_input() {
        assert_eq!(format_ranges([9, 2, 3]), "rows 2-3, row 9");
    }

    #[test]
    fn test_duplicates_are_counted_once() {
        assert_eq!(format_ranges([3, 3, 4]), "rows 3-4");
        assert_eq!(format_ranges([6, 6]), "row 6");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_ranges(Vec::new()), "");
    }

    #[test]
    fn test_row_list() {
        assert_eq!(format_row_list(&[2, 3, 9]), "2, 3, 9");
        assert_eq!(format_row_list(&[4]), "4");
    }
}
