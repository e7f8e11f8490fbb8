//! Column rule evaluation.
//!
//! A rule whose column is missing from the row schema is skipped without a
//! violation.

use catalog_model::{ColumnRule, EmptyValues, Row, RuleKind, RuleTable, ValidationMessage};

use crate::normalize::{is_decimal, normalize_value};

use super::Violation;

/// Checks one raw value against one rule.
pub fn check_value(rule: &ColumnRule, raw: &str, empty_values: EmptyValues) -> Option<Violation> {
    let column = rule.name.clone();

    if normalize_value(raw).is_empty() {
        if rule.is_required() {
            return Some(Violation::RequiredMissing { column });
        }
        if empty_values == EmptyValues::Skip {
            return None;
        }
    }

    let value = raw.trim();
    match &rule.kind {
        RuleKind::Required => None,
        RuleKind::MaxLength(max_length) => (value.chars().count() > *max_length).then(|| {
            Violation::TooLong {
                column,
                max_length: *max_length,
            }
        }),
        RuleKind::Numeric => (!is_decimal(value)).then_some(Violation::NotNumeric { column }),
        RuleKind::Enum(allowed) => {
            let lowered = value.to_lowercase();
            let known = allowed.iter().any(|a| a.to_lowercase() == lowered);
            (!known).then(|| Violation::InvalidValue {
                column,
                allowed: allowed.clone(),
            })
        }
    }
}

/// Every violation in a row, in rule table order.
pub fn row_violations(row: &Row, table: &RuleTable) -> Vec<Violation> {
    table
        .rules()
        .iter()
        .filter_map(|rule| {
            let raw = row.get(&rule.name)?;
            check_value(rule, raw, table.empty_values())
        })
        .collect()
}

/// Error messages for a row, each carrying the row number.
pub fn validate_row(row: &Row, table: &RuleTable) -> Vec<ValidationMessage> {
    row_violations(row, table)
        .iter()
        .map(|violation| ValidationMessage::error(violation.message(), row.number()))
        .collect()
}
