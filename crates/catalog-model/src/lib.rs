pub mod message;
pub mod report;
pub mod row;
pub mod rules;

pub use message::{MessageKind, ValidationMessage};
pub use report::{DuplicateGroup, FileReport, LibraryComparison, Outcome, RevisedComparison};
pub use row::{Cell, FIRST_DATA_ROW, HEADER_ROW, Row, Table};
pub use rules::{
    ColumnRule, EmptyValues, FOLDER_COLUMNS, FOLDER_PREFIX, HeaderSchema, REVISED_HEADERS,
    RuleKind, RuleTable, UNIT_OF_MEASURE_VALUES,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_outcomes() {
        let clean = FileReport::default();
        assert_eq!(clean.outcome(), Outcome::Clean);

        let warned = FileReport::new(vec![], vec!["check row 2".to_string()]);
        assert_eq!(warned.outcome(), Outcome::Warnings);
        assert!(!warned.has_errors());

        let fatal = FileReport::fatal("bad header");
        assert_eq!(fatal.outcome(), Outcome::Errors);
        assert_eq!(fatal.errors.len(), 1);
        assert!(fatal.warnings.is_empty());
    }

    #[test]
    fn reports_serialize_with_camel_case_fields() {
        let comparison = RevisedComparison {
            compare_warnings: vec!["Duplicate rows: 2, 3.".to_string()],
        };
        let json = serde_json::to_string(&comparison).expect("serialize comparison");
        assert_eq!(json, r#"{"compareWarnings":["Duplicate rows: 2, 3."]}"#);

        let report = FileReport::fatal("x");
        let json = serde_json::to_string(&report).expect("serialize report");
        assert_eq!(json, r#"{"errors":["x"],"warnings":[]}"#);
    }
}
