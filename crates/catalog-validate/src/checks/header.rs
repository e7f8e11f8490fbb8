//! Header layout check for the revised export.

use catalog_model::HeaderSchema;

pub const HEADER_MISMATCH_MESSAGE: &str =
    "The column headers in the first row do not match the expected format.";

/// Returns the mismatch message when `headers` differ from the schema in
/// membership or order.
pub fn check_headers<S: AsRef<str>>(headers: &[S], schema: &HeaderSchema) -> Option<&'static str> {
    if schema.matches(headers) {
        None
    } else {
        Some(HEADER_MISMATCH_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::REVISED_HEADERS;

    #[test]
    fn test_exact_headers_pass() {
        assert_eq!(check_headers(REVISED_HEADERS, &HeaderSchema::revised()), None);
    }

    #[test]
    fn test_swapped_headers_fail() {
        let mut headers: Vec<&str> = REVISED_HEADERS.to_vec();
        headers.swap(0, 1);
        assert_eq!(
            check_headers(&headers, &HeaderSchema::revised()),
            Some(HEADER_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn test_renamed_header_fails() {
        let mut headers: Vec<&str> = REVISED_HEADERS.to_vec();
        headers[27] = "ExternalID";
        assert!(check_headers(&headers, &HeaderSchema::revised()).is_some());
    }
}
