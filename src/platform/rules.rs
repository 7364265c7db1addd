//! Ordered rule tables with first-match-wins evaluation.
//!
//! A [`RuleSet`] is a platform's list of named [`Rule`]s. Evaluation walks the
//! list in declaration order; the first rule whose predicate holds runs its
//! extractor into a fresh [`ResultRecord`] and evaluation stops. If no rule holds,
//! the record comes back empty.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use super::error::ClassifyError;
use super::utils::compile_static_regex;
use crate::parser::{DecomposedUrl, QueryMap, QueryValue};
use crate::record::{AccessRecord, ResultRecord};

/// Fills a record from a successful match.
pub type Extractor = fn(&Match<'_>, &mut ResultRecord);

/// Extra condition checked after the pattern matched.
pub type Guard = fn(&Match<'_>) -> bool;

/// URL component a rule pattern is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Path,
    Hostname,
}

#[derive(Debug)]
enum Matcher {
    Pattern(Target, Regex),
    Always,
}

/// One recognizable URL shape and the extraction it triggers.
pub struct Rule {
    name: &'static str,
    matcher: Matcher,
    guard: Option<Guard>,
    extract: Extractor,
}

impl Rule {
    /// Creates a rule testing `pattern` against the pathname.
    #[must_use]
    pub fn path(name: &'static str, pattern: &str, extract: Extractor) -> Self {
        Self::with_matcher(
            name,
            Matcher::Pattern(Target::Path, compile_static_regex(pattern)),
            extract,
        )
    }

    /// Creates a rule testing `pattern` against the hostname.
    #[must_use]
    pub fn hostname(name: &'static str, pattern: &str, extract: Extractor) -> Self {
        Self::with_matcher(
            name,
            Matcher::Pattern(Target::Hostname, compile_static_regex(pattern)),
            extract,
        )
    }

    /// Creates a rule that matches every URL; combine with [`Rule::when`].
    #[must_use]
    pub fn always(name: &'static str, extract: Extractor) -> Self {
        Self::with_matcher(name, Matcher::Always, extract)
    }

    fn with_matcher(name: &'static str, matcher: Matcher, extract: Extractor) -> Self {
        Self {
            name,
            matcher,
            guard: None,
            extract,
        }
    }

    /// Adds a condition that must also hold for the rule to fire.
    #[must_use]
    pub fn when(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the match context if this rule fires for the input.
    fn try_match<'a>(
        &self,
        url: &'a DecomposedUrl,
        pathname: &'a str,
        access: &'a AccessRecord,
    ) -> Option<Match<'a>> {
        let captures = match &self.matcher {
            Matcher::Pattern(Target::Path, regex) => Some(regex.captures(pathname)?),
            Matcher::Pattern(Target::Hostname, regex) => Some(regex.captures(&url.hostname)?),
            Matcher::Always => None,
        };
        let candidate = Match {
            url,
            pathname,
            access,
            captures,
        };
        match self.guard {
            Some(guard) if !guard(&candidate) => None,
            _ => Some(candidate),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}

/// Read-only view of the input handed to guards and extractors.
pub struct Match<'a> {
    url: &'a DecomposedUrl,
    pathname: &'a str,
    access: &'a AccessRecord,
    captures: Option<Captures<'a>>,
}

impl<'a> Match<'a> {
    /// Returns capture group `index`, if it participated in the match.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.captures
            .as_ref()
            .and_then(|caps| caps.get(index))
            .map(|m| m.as_str())
    }

    /// Returns capture group `index` as an owned string.
    #[must_use]
    pub fn cap(&self, index: usize) -> Option<String> {
        self.group(index).map(str::to_string)
    }

    /// Returns the first value of a query parameter.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&'a str> {
        self.url.param(key)
    }

    /// Returns the first value of a query parameter as an owned string.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<String> {
        self.query(key).map(str::to_string)
    }

    /// Returns true when the query carries `key`.
    #[must_use]
    pub fn has_param(&self, key: &str) -> bool {
        self.url.has_param(key)
    }

    /// Returns the full query mapping.
    #[must_use]
    pub fn params(&self) -> &'a QueryMap {
        &self.url.query
    }

    #[must_use]
    pub fn pathname(&self) -> &'a str {
        self.pathname
    }

    #[must_use]
    pub fn hostname(&self) -> &'a str {
        &self.url.hostname
    }

    /// Returns true when the URL carries a fragment.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.url.hash.is_some()
    }

    /// Returns the first value of `key` in the decomposed fragment.
    #[must_use]
    pub fn fragment_param(&self, key: &str) -> Option<String> {
        self.url
            .fragment_query()?
            .get(key)
            .and_then(QueryValue::first)
            .map(str::to_string)
    }

    /// Returns the access record being classified.
    #[must_use]
    pub fn access(&self) -> &'a AccessRecord {
        self.access
    }
}

/// A platform's ordered rule table.
pub struct RuleSet {
    platform: &'static str,
    rules: Vec<Rule>,
    enrich: Option<Extractor>,
    override_param: Option<&'static str>,
}

impl RuleSet {
    /// Creates a rule set evaluated in the order of `rules`.
    #[must_use]
    pub fn new(platform: &'static str, rules: Vec<Rule>) -> Self {
        Self {
            platform,
            rules,
            enrich: None,
            override_param: None,
        }
    }

    /// Adds a step that runs after any rule fired, never on a no-match.
    #[must_use]
    pub fn with_enrichment(mut self, enrich: Extractor) -> Self {
        self.enrich = Some(enrich);
        self
    }

    /// Classifies against the URL embedded in query parameter `param` when present.
    #[must_use]
    pub fn with_url_override(mut self, param: &'static str) -> Self {
        self.override_param = Some(param);
        self
    }

    #[must_use]
    pub fn platform(&self) -> &'static str {
        self.platform
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classifies one decomposed URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MalformedInput`] when the URL has no pathname.
    pub fn classify(
        &self,
        url: &DecomposedUrl,
        access: &AccessRecord,
    ) -> Result<ResultRecord, ClassifyError> {
        Ok(self
            .evaluate(url, access)?
            .map(|(_, record)| record)
            .unwrap_or_default())
    }

    /// Returns the name of the rule that fires for `url`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MalformedInput`] when the URL has no pathname.
    pub fn matching_rule(
        &self,
        url: &DecomposedUrl,
        access: &AccessRecord,
    ) -> Result<Option<&'static str>, ClassifyError> {
        Ok(self.evaluate(url, access)?.map(|(name, _)| name))
    }

    fn evaluate(
        &self,
        url: &DecomposedUrl,
        access: &AccessRecord,
    ) -> Result<Option<(&'static str, ResultRecord)>, ClassifyError> {
        if url.pathname().is_none() {
            return Err(ClassifyError::missing_pathname(self.platform));
        }

        let embedded = self.embedded_url(url);
        let target = embedded.as_ref().unwrap_or(url);
        let pathname = target
            .pathname()
            .ok_or_else(|| ClassifyError::missing_pathname(self.platform))?;

        for rule in &self.rules {
            let Some(found) = rule.try_match(target, pathname, access) else {
                continue;
            };
            let mut record = ResultRecord::new();
            (rule.extract)(&found, &mut record);
            if let Some(enrich) = self.enrich {
                enrich(&found, &mut record);
            }
            debug!(platform = self.platform, rule = rule.name, "Rule matched");
            return Ok(Some((rule.name, record)));
        }

        trace!(platform = self.platform, pathname, "No rule matched");
        Ok(None)
    }

    fn embedded_url(&self, url: &DecomposedUrl) -> Option<DecomposedUrl> {
        let raw = url.param(self.override_param?)?;
        match DecomposedUrl::parse(raw) {
            Ok(embedded) => {
                debug!(platform = self.platform, url = raw, "Classifying embedded URL");
                Some(embedded)
            }
            Err(error) => {
                debug!(
                    platform = self.platform,
                    error = %error,
                    "Override parameter is not an absolute URL; using outer URL"
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.rules.iter().map(Rule::name).collect();
        f.debug_struct("RuleSet")
            .field("platform", &self.platform)
            .field("rules", &names)
            .field("override_param", &self.override_param)
            .finish()
    }
}

/// Classifies an absolute URL string with `rules`; used by platform unit tests.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn classify_url(rules: &RuleSet, raw: &str) -> ResultRecord {
    let url = DecomposedUrl::parse(raw).unwrap();
    rules.classify(&url, &AccessRecord::default()).unwrap()
}
