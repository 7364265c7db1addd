//! Shared helpers for platform rule sets: regex compilation, host matching,
//! DOI reconstruction and lookup-table enrichment.

use regex::Regex;

/// Compiles a regex at static init; panics on invalid pattern.
pub fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

/// Normalizes a host string: trim, strip leading "www.", trailing '.', and lowercases.
#[must_use]
pub fn canonical_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Returns true if `host` is `domain` or one of its subdomains.
#[must_use]
pub fn host_within(host: &str, domain: &str) -> bool {
    let host = canonical_host(host);
    let domain = canonical_host(domain);
    !domain.is_empty() && (host == domain || host.ends_with(&format!(".{domain}")))
}

/// Joins a platform DOI prefix and a path-derived suffix with exactly one `/`.
#[must_use]
pub fn with_doi_prefix(prefix: &str, suffix: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        suffix.trim_start_matches('/')
    )
}

/// Static code-to-label table used for `publication_title` enrichment.
pub type LookupTable = &'static [(&'static str, &'static str)];

/// Returns the label for `code`, or `None` when the code is not in the table.
#[must_use]
pub fn lookup_title(table: LookupTable, code: &str) -> Option<String> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| (*label).to_string())
}

/// Returns the label of the first table entry whose key occurs in `host`.
#[must_use]
pub fn lookup_title_by_host(table: LookupTable, host: &str) -> Option<String> {
    let host = host.to_ascii_lowercase();
    table
        .iter()
        .find(|(key, _)| host.contains(*key))
        .map(|(_, label)| (*label).to_string())
}

/// Drops leading zeros of a numeric token, keeping a single `0` for all-zero input.
#[must_use]
pub fn strip_leading_zeros(value: &str) -> String {
    let trimmed = value.trim_start_matches('0');
    if trimmed.is_empty() && !value.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Strips an ASCII `prefix` compared case-insensitively. Safe on any UTF-8 `value`.
#[must_use]
pub fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    value
        .get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .and_then(|_| value.get(prefix.len()..))
}

/// Strips an ASCII `suffix` compared case-insensitively. Safe on any UTF-8 `value`.
#[must_use]
pub fn strip_suffix_ignore_case<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = value.len().checked_sub(suffix.len())?;
    value
        .get(cut..)
        .filter(|tail| tail.eq_ignore_ascii_case(suffix))
        .and_then(|_| value.get(..cut))
}

/// Removes the hyphens of an ISBN or ISSN.
#[must_use]
pub fn strip_hyphens(value: &str) -> String {
    value.replace('-', "")
}
