use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::{ColumnRule, EmptyValues, RuleKind, RuleTable};
use catalog_validate::ValidatorConfig;

use crate::types::CheckResult;

/// Whether rendered tables carry ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyling {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Summary table followed by the error and warning lists.
pub fn render_summary(result: &CheckResult, styling: TableStyling) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table, styling);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for (index, input) in result.inputs.iter().enumerate() {
        // Counts belong to the file the report is about.
        let (errors, warnings) = if index == 0 {
            (
                Some(result.report.errors().len()),
                Some(result.report.warnings().len()),
            )
        } else {
            (None, None)
        };
        table.add_row(vec![
            Cell::new(input.role).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(input.path.display()),
            Cell::new(input.rows),
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
        ]);
    }

    format!(
        "{}\n{table}\n{}",
        result.check.label(),
        render_messages(result)
    )
}

/// The error and warning lists, one message per line.
pub fn render_messages(result: &CheckResult) -> String {
    let errors = result.report.errors();
    let warnings = result.report.warnings();
    if errors.is_empty() && warnings.is_empty() {
        return "No issues found.".to_string();
    }

    let mut lines = Vec::new();
    if !errors.is_empty() {
        lines.push("Errors:".to_string());
        lines.extend(errors.iter().map(|message| format!("- {message}")));
    }
    if !warnings.is_empty() {
        lines.push("Warnings:".to_string());
        lines.extend(warnings.iter().map(|message| format!("- {message}")));
    }
    lines.join("\n")
}

/// The report as pretty-printed JSON.
pub fn render_json(result: &CheckResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&result.report)
}

/// Rule tables and the expected revised header layout.
pub fn render_rules(config: &ValidatorConfig, styling: TableStyling) -> String {
    let mut sections = vec![
        format!(
            "Catalog import rules\n{}",
            rule_table(&config.catalog_rules, styling)
        ),
        format!(
            "Revised export rules\n{}",
            rule_table(&config.revised_rules, styling)
        ),
    ];

    let mut headers = Table::new();
    headers.set_header(vec![header_cell("#"), header_cell("Column")]);
    apply_table_style(&mut headers, styling);
    align_column(&mut headers, 0, CellAlignment::Right);
    for (index, column) in config.revised_headers.columns().iter().enumerate() {
        headers.add_row(vec![Cell::new(index + 1), Cell::new(column)]);
    }
    sections.push(format!("Revised export header\n{headers}"));

    sections.push(format!(
        "Ignored by duplicate checks: {} (catalog), {}* (revised)",
        config.folder_columns.join(", "),
        config.folder_prefix
    ));
    sections.join("\n\n")
}

fn rule_table(rules: &RuleTable, styling: TableStyling) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Check"),
        header_cell("Required"),
        header_cell("Empty values"),
    ]);
    apply_table_style(&mut table, styling);
    align_column(&mut table, 2, CellAlignment::Center);

    let empty_values = match rules.empty_values() {
        EmptyValues::Skip => "skipped",
        EmptyValues::Check => "checked",
    };
    for rule in rules.rules() {
        table.add_row(vec![
            Cell::new(&rule.name),
            Cell::new(describe_rule(rule)),
            required_cell(rule.is_required()),
            dim_cell(empty_values),
        ]);
    }
    table
}

fn describe_rule(rule: &ColumnRule) -> String {
    match &rule.kind {
        RuleKind::Required => "presence".to_string(),
        RuleKind::MaxLength(max_length) => format!("at most {max_length} characters"),
        RuleKind::Numeric => "numeric".to_string(),
        RuleKind::Enum(allowed) => format!("one of: {}", allowed.join(", ")),
    }
}

fn required_cell(required: bool) -> Cell {
    if required {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn apply_styling(table: &mut Table, styling: TableStyling) {
    match styling {
        TableStyling::Auto => {}
        TableStyling::Always => {
            table.enforce_styling();
        }
        TableStyling::Never => {
            table.force_no_tty();
        }
    }
}

fn apply_table_style(table: &mut Table, styling: TableStyling) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    apply_styling(table, styling);
}

fn apply_summary_table_style(table: &mut Table, styling: TableStyling) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    apply_styling(table, styling);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
