//! Input side of classification: decomposing access URLs.
//!
//! The rule engine consumes a [`DecomposedUrl`]. This module produces one from a
//! raw URL string, from free log text, or from a pre-decomposed JSON object.
//!
//! # Example
//!
//! ```
//! use access_classifier::parser::parse_input;
//!
//! let result = parse_input(r#"
//! https://pubs.rsc.org/en/content/articlehtml/2014/rp/c4rp00006d
//! not a url
//! https://www.annualreviews.org/doi/abs/10.1146/annurev-neuro-062111-150343
//! "#);
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.items[0].url.hostname, "pubs.rsc.org");
//! ```

mod decomposed;
mod error;
mod input;
mod url;

pub use decomposed::{DecomposedUrl, QueryMap, QueryValue, collect_query};
pub use error::{MAX_URL_LENGTH, ParseError};
pub use input::{ParseResult, ParsedItem};
pub use url::extract_urls;

use tracing::debug;

/// Scans raw text (log lines, URL lists) and decomposes every URL found.
///
/// - Empty input returns an empty result (not an error)
/// - Invalid candidates are collected in `errors` and do not stop the scan
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse_input(input: &str) -> ParseResult {
    let mut result = ParseResult::new();

    if input.trim().is_empty() {
        debug!("Empty input provided");
        return result;
    }

    for extracted in extract_urls(input) {
        match extracted {
            Ok(item) => result.add_item(item),
            Err(error) => result.add_error(error),
        }
    }

    debug!(
        urls = result.len(),
        rejected = result.error_count(),
        "Input scanned"
    );
    result
}

/// Decodes one line of pre-decomposed JSON input.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] when the line is not a JSON object of the
/// [`DecomposedUrl`] shape. A missing `pathname` is *not* rejected here; the
/// classifier reports it as a structural error.
pub fn parse_json_line(line_number: usize, line: &str) -> Result<DecomposedUrl, ParseError> {
    serde_json::from_str(line).map_err(|e| ParseError::invalid_json(line_number, &e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_empty_is_empty_result() {
        let result = parse_input("   \n\t ");
        assert!(result.is_empty());
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_parse_input_collects_items_and_errors() {
        let result = parse_input("https://www.cairn.info/revue-x.htm\nhttp://[bad\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_parse_json_line_reads_query_values() {
        let url = parse_json_line(1, r#"{"pathname":"/search","query":{"s":"potato"}}"#).unwrap();
        assert_eq!(url.pathname(), Some("/search"));
        assert_eq!(url.param("s"), Some("potato"));
    }

    #[test]
    fn test_parse_json_line_rejects_non_object() {
        let err = parse_json_line(3, "[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { line: 3, .. }));
    }
}
