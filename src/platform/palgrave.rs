//! Palgrave Macmillan catalogue (`palgrave.com`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static PALGRAVE_HOSTS: &[&str] = &["palgrave.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "palgrave-macmillan",
        vec![
            // /us/campaigns/media-and-marginalisation, /gp/series/14534
            Rule::path("series", r"(?i)^/(?:us/campaigns|gp/series)/(.*)$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
            }),
            // /us/book/9783319905808
            Rule::path("book", r"(?i)^/us/book/(.*)$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.print_identifier = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /us/search?query=sandwich
            Rule::path("search", r"(?i)^/us/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
        ],
    )
});

#[derive(Debug, Default)]
pub struct PalgravePlatform;

impl PalgravePlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for PalgravePlatform {
    fn id(&self) -> &'static str {
        "palgrave-macmillan"
    }

    fn name(&self) -> &'static str {
        "Palgrave Macmillan"
    }

    fn hosts(&self) -> &'static [&'static str] {
        PALGRAVE_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::rules::classify_url;

    #[test]
    fn test_palgrave_campaign_and_series() {
        let record = classify_url(
            &RULES,
            "https://www.palgrave.com/us/campaigns/media-and-marginalisation",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.title_id.as_deref(), Some("media-and-marginalisation"));

        let record = classify_url(&RULES, "https://www.palgrave.com/gp/series/14534");
        assert_eq!(record.title_id.as_deref(), Some("14534"));
    }

    #[test]
    fn test_palgrave_book_isbn() {
        let record = classify_url(&RULES, "https://www.palgrave.com/us/book/9783319905808");
        assert_eq!(record.print_identifier.as_deref(), Some("9783319905808"));
        assert_eq!(record.unitid.as_deref(), Some("9783319905808"));
    }

    #[test]
    fn test_palgrave_search_and_no_match() {
        let record = classify_url(&RULES, "https://www.palgrave.com/us/search?query=sandwich");
        assert_eq!(record.rtype, Some(ResourceType::Search));
        assert!(classify_url(&RULES, "https://www.palgrave.com/gp/about").is_empty());
    }
}
