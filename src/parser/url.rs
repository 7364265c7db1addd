//! URL extraction from access-log text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};
use url::Url;

use super::decomposed::DecomposedUrl;
use super::error::{MAX_URL_LENGTH, ParseError};
use super::input::ParsedItem;
use crate::platform::compile_static_regex;

/// Matches http(s) URLs up to whitespace, angle brackets or quotes.
/// Log formats wrap request URLs in quotes, so the quote terminates the match.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_static_regex(r#"https?://[^\s<>"'\]]+"#));

/// Result type for URL extraction operations.
pub type UrlExtractionResult = Result<ParsedItem, ParseError>;

/// Extracts and decomposes every http(s) URL found in `input`.
///
/// Each candidate is validated on its own, so a malformed URL on one log line
/// yields an `Err` entry without affecting the others.
///
/// # Examples
///
/// ```
/// use access_classifier::parser::extract_urls;
///
/// let results = extract_urls(r#"10.0.0.1 - - "GET https://pubs.rsc.org/en/ebooks HTTP/1.1" 200"#);
/// assert_eq!(results.len(), 1);
/// assert!(results[0].is_ok());
/// ```
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn extract_urls(input: &str) -> Vec<UrlExtractionResult> {
    URL_PATTERN
        .find_iter(input)
        .map(|found| {
            let cleaned = clean_url_trailing(found.as_str());
            trace!(url = %cleaned, "found URL candidate");
            let result = validate_url(cleaned).map(|url| {
                let mut decomposed = DecomposedUrl::from_url(&url);
                decomposed.href = Some(cleaned.to_string());
                ParsedItem::new(cleaned, decomposed)
            });
            if let Err(error) = &result {
                debug!(url = %cleaned, error = %error, "URL validation failed");
            }
            result
        })
        .collect()
}

/// Strips sentence punctuation and unbalanced closing brackets captured after a URL.
fn clean_url_trailing(url: &str) -> &str {
    let mut result = url;
    while let Some(last) = result.chars().last() {
        match last {
            '.' | ',' | ';' | ':' | '!' | '?' => {
                result = &result[..result.len() - 1];
            }
            ')' | ']' => {
                let open = if last == ')' { '(' } else { '[' };
                let opened = result.chars().filter(|&c| c == open).count();
                let closed = result.chars().filter(|&c| c == last).count();
                if closed > opened {
                    result = &result[..result.len() - 1];
                } else {
                    break;
                }
            }
            _ => break,
        }
    }
    result
}

/// Validates length, scheme and host of a URL candidate.
fn validate_url(raw: &str) -> Result<Url, ParseError> {
    if raw.len() > MAX_URL_LENGTH {
        return Err(ParseError::too_long(raw));
    }

    let parsed = Url::parse(raw).map_err(|e| ParseError::malformed(raw, &e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(ParseError::unsupported_scheme(raw, scheme)),
    }

    if parsed.host().is_none() {
        return Err(ParseError::no_host(raw));
    }

    Ok(parsed)
}
