//! Cell value normalization.
//!
//! Two cells are "the same" for duplicate detection exactly when their
//! normalized values are equal. Normalization strips invisible characters,
//! trims, and renders decimals with two fraction digits, so `"5"`, `"5.0"`
//! and `" 5.00 \r\n"` all become `"5.00"`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

/// Characters removed from a value before comparison.
const INVISIBLE: &[char] = &['\r', '\n', '\u{200B}', '\u{00A0}'];

/// Fraction digits of a normalized decimal.
const DECIMAL_SCALE: i64 = 2;

/// Normalizes an optional cell. Absent cells normalize to the empty string.
pub fn normalize(raw: Option<&str>) -> String {
    raw.map(normalize_value).unwrap_or_default()
}

/// Normalizes a cell value.
///
/// Idempotent: `normalize_value(&normalize_value(x)) == normalize_value(x)`.
pub fn normalize_value(raw: &str) -> String {
    let stripped: String = raw.trim().chars().filter(|c| !INVISIBLE.contains(c)).collect();
    let stripped = stripped.trim();

    match parse_decimal(stripped) {
        Some(value) => format_decimal(&value),
        None => stripped.to_string(),
    }
}

/// Parses a base-10 decimal.
///
/// Accepts an optional leading or trailing sign (not both), digits with `,`
/// group separators in the integer part, and an optional `.` fraction
/// (`"1,234.5"`, `"-.5"`, `"7."`, `"5-"`).
/// Exponents and currency symbols are rejected. Surrounding whitespace is
/// ignored.
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let canonical = canonical_decimal(text.trim())?;
    BigDecimal::from_str(&canonical).ok()
}

/// Returns true if `text` parses as a decimal.
pub fn is_decimal(text: &str) -> bool {
    parse_decimal(text).is_some()
}

/// Renders a decimal with two fraction digits, rounding half away from zero.
pub fn format_decimal(value: &BigDecimal) -> String {
    value
        .with_scale_round(DECIMAL_SCALE, RoundingMode::HalfUp)
        .to_plain_string()
}

/// Rewrites accepted decimal syntax as `[-]digits.digits` for the parser.
fn canonical_decimal(text: &str) -> Option<String> {
    let (sign, body) = if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        ("", rest)
    } else if let Some(rest) = text.strip_suffix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_suffix('+') {
        ("", rest)
    } else {
        ("", text)
    };
    if body.ends_with(['+', '-']) {
        return None;
    }

    let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));

    if integer.starts_with(',') {
        return None;
    }
    if !integer.bytes().all(|b| b.is_ascii_digit() || b == b',') {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits: String = integer.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() && fraction.is_empty() {
        return None;
    }

    let integer = if digits.is_empty() { "0" } else { digits.as_str() };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    Some(format!("{sign}{integer}.{fraction}"))
}
