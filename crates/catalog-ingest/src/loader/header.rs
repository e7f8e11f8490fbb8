//! CSV header normalization.

/// Normalizes a header value: strips a leading byte order mark and trims
/// surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Decodes a raw header field. Invalid UTF-8 is replaced rather than rejected.
pub fn decode_header(raw: &[u8]) -> String {
    normalize_header(&String::from_utf8_lossy(raw))
}

/// Returns true if no header field carries a name.
pub fn is_blank_header(headers: &[String]) -> bool {
    headers.iter().all(String::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  ItemName  "), "ItemName");
        assert_eq!(normalize_header("\u{feff}ExportId"), "ExportId");
    }

    #[test]
    fn test_decode_header_lossy() {
        assert_eq!(decode_header(b"Item\xffName"), "Item\u{fffd}Name");
    }

    #[test]
    fn test_blank_header() {
        assert!(is_blank_header(&[String::new(), String::new()]));
        assert!(!is_blank_header(&[String::new(), "A".to_string()]));
    }
}
