//! Column rule tables and header schemas.
//!
//! The tables are plain values handed to the validation engine. The catalog
//! and revised-export constants are exposed through constructors so callers
//! can swap in their own tables.

use serde::{Deserialize, Serialize};

/// Allowed `UnitOfMeasure` values (compared case-insensitively).
pub const UNIT_OF_MEASURE_VALUES: &[&str] =
    &["sq ft", "lin ft", "cu yd", "m", "sq m", "cu m", "each"];

/// Folder hierarchy columns excluded from duplicate signatures.
pub const FOLDER_COLUMNS: &[&str] = &["FolderLevel1", "FolderLevel2", "FolderLevel3", "FolderLevel4"];

/// Name prefix of the folder columns in the revised export.
pub const FOLDER_PREFIX: &str = "Folder";

/// Column headers of the revised export, in order.
pub const REVISED_HEADERS: &[&str] = &[
    "ExportId",
    "ItemName",
    "ItemDescription",
    "PurchaseUnit",
    "UnitOfMeasure",
    "CoverageRatePurchase",
    "CoverageRateMeasured",
    "FolderLevel1",
    "FolderLevel2",
    "FolderLevel3",
    "FolderLevel4",
    "FolderLevel5",
    "CostType1",
    "UnitCost1",
    "AccountingCode1",
    "CostType2",
    "UnitCost2",
    "AccountingCode2",
    "CostType3",
    "UnitCost3",
    "AccountingCode3",
    "CostType4",
    "UnitCost4",
    "AccountingCode4",
    "CostType5",
    "UnitCost5",
    "AccountingCode5",
    "ExternalId",
];

/// The constraint a rule applies to a column value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Presence only.
    Required,
    /// Trimmed value may hold at most this many characters.
    MaxLength(usize),
    /// Value must parse as a decimal number.
    Numeric,
    /// Value must be one of the listed values, ignoring case.
    Enum(Vec<String>),
}

/// A rule attached to one named column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRule {
    pub name: String,
    pub kind: RuleKind,
    pub required: bool,
}

impl ColumnRule {
    pub fn new(name: impl Into<String>, kind: RuleKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
        }
    }

    /// A presence-only rule.
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, RuleKind::Required, true)
    }

    /// Returns true if an empty value violates this rule.
    pub fn is_required(&self) -> bool {
        self.required || self.kind == RuleKind::Required
    }
}

/// How format checks treat empty values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyValues {
    /// Empty values only answer to the required check.
    #[default]
    Skip,
    /// Empty values go through the format checks as well.
    Check,
}

/// An ordered, immutable list of column rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<ColumnRule>,
    empty_values: EmptyValues,
}

impl RuleTable {
    pub fn new(rules: Vec<ColumnRule>, empty_values: EmptyValues) -> Self {
        Self {
            rules,
            empty_values,
        }
    }

    /// Rules for the primary catalog import.
    pub fn catalog() -> Self {
        Self::new(
            vec![
                ColumnRule::new("ItemName", RuleKind::MaxLength(120), true),
                ColumnRule::new("PurchaseUnit", RuleKind::MaxLength(255), false),
                ColumnRule::new("UnitOfMeasure", unit_of_measure(), true),
                ColumnRule::new("CoverageRatePurchase", RuleKind::Numeric, true),
                ColumnRule::new("CostType1", RuleKind::MaxLength(50), true),
                ColumnRule::new("UnitCost1", RuleKind::Numeric, true),
            ],
            EmptyValues::Skip,
        )
    }

    /// Rules for the revised export.
    pub fn revised() -> Self {
        Self::new(
            vec![
                ColumnRule::required("ExportId"),
                ColumnRule::required("ItemName"),
                ColumnRule::new("UnitOfMeasure", unit_of_measure(), false),
                ColumnRule::new("CoverageRatePurchase", RuleKind::Numeric, false),
                ColumnRule::new("CoverageRateMeasured", RuleKind::Numeric, false),
            ],
            EmptyValues::Check,
        )
    }

    pub fn rules(&self) -> &[ColumnRule] {
        &self.rules
    }

    pub fn empty_values(&self) -> EmptyValues {
        self.empty_values
    }

    /// Rules that apply to a column, in table order.
    pub fn for_column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a ColumnRule> {
        self.rules.iter().filter(move |rule| rule.name == column)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::catalog()
    }
}

fn unit_of_measure() -> RuleKind {
    RuleKind::Enum(
        UNIT_OF_MEASURE_VALUES
            .iter()
            .map(|value| (*value).to_string())
            .collect(),
    )
}

/// An exact, order-sensitive list of expected column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSchema {
    columns: Vec<String>,
}

impl HeaderSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// The 28-column revised export layout.
    pub fn revised() -> Self {
        Self::new(REVISED_HEADERS.iter().copied())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true only when `headers` has the same names in the same order.
    pub fn matches<S: AsRef<str>>(&self, headers: &[S]) -> bool {
        headers.len() == self.columns.len()
            && headers
                .iter()
                .zip(&self.columns)
                .all(|(actual, expected)| actual.as_ref() == expected)
    }
}

impl Default for HeaderSchema {
    fn default() -> Self {
        Self::revised()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_table_order() {
        let table = RuleTable::catalog();
        let names: Vec<&str> = table.rules().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "ItemName",
                "PurchaseUnit",
                "UnitOfMeasure",
                "CoverageRatePurchase",
                "CostType1",
                "UnitCost1"
            ]
        );
        assert_eq!(table.empty_values(), EmptyValues::Skip);
        assert!(!table.rules()[1].is_required());
    }

    #[test]
    fn presence_rule_is_required() {
        let rule = ColumnRule::required("ExportId");
        assert!(rule.is_required());
        assert_eq!(RuleTable::revised().for_column("ExportId").count(), 1);
    }

    #[test]
    fn revised_schema_has_28_columns() {
        let schema = HeaderSchema::revised();
        assert_eq!(schema.columns().len(), 28);
        assert!(schema.matches(REVISED_HEADERS));
    }

    #[test]
    fn schema_is_order_sensitive() {
        let schema = HeaderSchema::new(["A", "B"]);
        assert!(schema.matches(&["A", "B"]));
        assert!(!schema.matches(&["B", "A"]));
        assert!(!schema.matches(&["A"]));
        assert!(!schema.matches(&["A", "B", "C"]));
    }
}
