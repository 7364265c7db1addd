//! Error types for URL decomposition and input scanning.

use thiserror::Error;

/// Maximum URL length to accept.
/// Longer candidates are usually log corruption or concatenated lines.
pub const MAX_URL_LENGTH: usize = 2000;

/// Errors that can occur while turning raw input into decomposed URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// URL is malformed or uses an unsupported scheme
    #[error("invalid URL '{url}': {reason}\n  Suggestion: {suggestion}")]
    InvalidUrl {
        /// The URL that failed validation
        url: String,
        /// Why the URL is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// URL exceeds maximum allowed length
    #[error(
        "URL too long ({length} chars, max {max}): {url_preview}...\n  Suggestion: Check the log line for concatenated or truncated entries"
    )]
    UrlTooLong {
        /// Truncated URL for display
        url_preview: String,
        /// Actual length
        length: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A pre-decomposed JSON line could not be decoded
    #[error("invalid decomposed URL on line {line}: {reason}\n  Suggestion: {suggestion}")]
    InvalidJson {
        /// 1-based input line number
        line: usize,
        /// Decoder message
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ParseError {
    /// Creates an `InvalidUrl` error for a non-web URL scheme.
    #[must_use]
    pub fn unsupported_scheme(url: &str, scheme: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: format!("scheme '{scheme}' is not supported"),
            suggestion: "Only http:// and https:// access URLs can be classified".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a URL the parser rejected.
    #[must_use]
    pub fn malformed(url: &str, parse_error: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: parse_error.to_string(),
            suggestion: "Pass an absolute URL such as https://host/path?query".to_string(),
        }
    }

    /// Creates an `InvalidUrl` error for a URL without a host.
    #[must_use]
    pub fn no_host(url: &str) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
            suggestion: "Ensure the URL includes the platform domain".to_string(),
        }
    }

    /// Creates a `UrlTooLong` error for URLs exceeding the maximum length.
    #[must_use]
    pub fn too_long(url: &str) -> Self {
        Self::UrlTooLong {
            url_preview: url.chars().take(50).collect(),
            length: url.len(),
            max: MAX_URL_LENGTH,
        }
    }

    /// Creates an `InvalidJson` error for a JSON input line.
    #[must_use]
    pub fn invalid_json(line: usize, reason: &str) -> Self {
        Self::InvalidJson {
            line,
            reason: reason.to_string(),
            suggestion: "Each line must be an object like {\"pathname\": \"/path\", \"query\": {}}"
                .to_string(),
        }
    }
}
