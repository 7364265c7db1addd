//! Decomposed URL: the structured input every platform rule set reads.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use super::error::{MAX_URL_LENGTH, ParseError};

/// Value of one query parameter.
///
/// Repeated keys are collected in order into [`QueryValue::Many`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// Returns the first value of the parameter.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }

    /// Returns every value in input order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::One(value) => vec![value.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::One(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Many(vec![first, value]);
            }
            Self::Many(values) => values.push(value),
        }
    }
}

/// Query parameters keyed by name, with parameter-name case preserved.
pub type QueryMap = BTreeMap<String, QueryValue>;

/// Collects decoded `(key, value)` pairs into a [`QueryMap`].
pub fn collect_query<'a, I>(pairs: I) -> QueryMap
where
    I: IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>,
{
    let mut query = QueryMap::new();
    for (key, value) in pairs {
        match query.get_mut(key.as_ref()) {
            Some(existing) => existing.push(value.into_owned()),
            None => {
                query.insert(key.into_owned(), QueryValue::One(value.into_owned()));
            }
        }
    }
    query
}

/// A URL split into the components rule sets match against.
///
/// `pathname` is optional only so that an upstream decomposition that forgot it
/// is reported as a structural error by the engine instead of a silent no-match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposedUrl {
    pub pathname: Option<String>,
    pub query: QueryMap,
    pub hostname: String,
    /// Fragment without the leading `#`.
    pub hash: Option<String>,
    /// Full original URL.
    pub href: Option<String>,
}

impl DecomposedUrl {
    /// Creates a decomposition holding only a pathname.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: Some(pathname.into()),
            ..Self::default()
        }
    }

    /// Returns the decomposition with `key=value` appended to the query.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                self.query.insert(key, QueryValue::One(value));
            }
        }
        self
    }

    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Parses an absolute URL string.
    ///
    /// The pathname is percent-decoded, query pairs are form-decoded and the
    /// fragment is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the string is too long, cannot be parsed, or has no host.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.len() > MAX_URL_LENGTH {
            return Err(ParseError::too_long(raw));
        }
        let url = Url::parse(raw).map_err(|e| ParseError::malformed(raw, &e.to_string()))?;
        if url.host_str().is_none() {
            return Err(ParseError::no_host(raw));
        }
        let mut decomposed = Self::from_url(&url);
        decomposed.href = Some(raw.to_string());
        Ok(decomposed)
    }

    /// Decomposes an already parsed URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        let raw_path = url.path();
        let pathname = urlencoding::decode(raw_path)
            .map_or_else(|_| raw_path.to_string(), Cow::into_owned);

        Self {
            pathname: Some(pathname),
            query: collect_query(url.query_pairs()),
            hostname: url.host_str().unwrap_or_default().to_string(),
            hash: url.fragment().map(str::to_string),
            href: Some(url.to_string()),
        }
    }

    /// Returns the pathname, or `None` for a structurally broken decomposition.
    #[must_use]
    pub fn pathname(&self) -> Option<&str> {
        self.pathname.as_deref()
    }

    /// Returns the first value of a query parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).and_then(QueryValue::first)
    }

    /// Returns true when the query carries `key`, even with an empty value.
    #[must_use]
    pub fn has_param(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }

    /// Decomposes the fragment as its own query string.
    ///
    /// Handles the `#!key=value&...` form and plain `#key=value` fragments.
    /// Returns `None` when the URL has no fragment.
    #[must_use]
    pub fn fragment_query(&self) -> Option<QueryMap> {
        let hash = self.hash.as_deref()?;
        let body = hash.strip_prefix('#').unwrap_or(hash);
        let body = body.strip_prefix('!').unwrap_or(body);
        let body = body
            .strip_prefix("/?")
            .or_else(|| body.strip_prefix('?'))
            .unwrap_or(body);
        Some(collect_query(form_urlencoded::parse(body.as_bytes())))
    }
}
