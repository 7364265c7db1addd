//! Types representing scanned input items and batch results.

use std::fmt;

use super::decomposed::DecomposedUrl;
use super::error::ParseError;

/// A single URL found in input, with its decomposition.
#[derive(Debug, Clone)]
pub struct ParsedItem {
    /// URL text exactly as found in the input
    pub raw: String,
    /// Decomposed form handed to the classifier
    pub url: DecomposedUrl,
}

impl ParsedItem {
    /// Creates a new parsed item.
    #[must_use]
    pub fn new(raw: impl Into<String>, url: DecomposedUrl) -> Self {
        Self {
            raw: raw.into(),
            url,
        }
    }

    /// Returns the hostname of the decomposed URL.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.url.hostname
    }
}

impl fmt::Display for ParsedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.url.hostname, self.raw)
    }
}

/// Collection of parsed items from one input batch.
#[derive(Debug, Default)]
pub struct ParseResult {
    /// Successfully decomposed URLs, in input order
    pub items: Vec<ParsedItem>,
    /// URL candidates that failed validation
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: ParsedItem) {
        self.items.push(item);
    }

    pub fn add_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Returns true if no URL was decomposed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns count of decomposed URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns count of rejected candidates.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} URL(s) decomposed, {} rejected",
            self.items.len(),
            self.errors.len()
        )
    }
}
