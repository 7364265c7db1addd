//! Scopus abstract and citation database (`scopus.com`).
//!
//! Records are identified by their EID (`2-s2.0-...`), carried in the query
//! under a page-specific parameter name.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static SCOPUS_HOSTS: &[&str] = &["scopus.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "scopus",
        vec![
            // /results/citedbyresults.url?sort=plf-f&cite=2-s2.0-84863856522
            Rule::path("cited-by", r"(?i)^/results/citedbyresults\.ur[il]$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.unitid = m.param("cite");
            }),
            // /record/display.url?eid=2-s2.0-33644857527
            Rule::path("record", r"(?i)^/record/([a-z]+)\.ur[il]$", |m, r| {
                match m.group(1) {
                    Some("display") => {
                        r.set_kind(ResourceType::Abs, MimeType::Html);
                        r.unitid = m.param("eid");
                    }
                    Some("references") => {
                        r.set_kind(ResourceType::Ref, MimeType::Html);
                        r.unitid = m.param("currentRecordPageEID");
                    }
                    Some("detail") => {
                        r.set_kind(ResourceType::Bio, MimeType::Html);
                        r.unitid = m.param("authorId");
                    }
                    Some("pdfdownload") => {
                        r.set_kind(ResourceType::Ref, MimeType::Pdf);
                        r.unitid = m.param("eid");
                    }
                    _ => {}
                }
            }),
            // /authid/detail.url?authorId=35190313500
            Rule::path("author", r"(?i)^/authid/detail\.ur[il]$", |m, r| {
                r.set_kind(ResourceType::Bio, MimeType::Html);
                r.unitid = m.param("authorId");
            }),
            // /citation/print.uri?eid=2-s2.0-84952777090&view=FullDocument
            Rule::path("citation-print", r"(?i)^/citation/print\.ur[il]$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Print);
                r.unitid = m.param("eid");
            }),
            // /results/results.uri, /results/authorNamesList.uri
            Rule::path("results", r"(?i)^/results/[A-Za-z]+\.uri$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /sources.uri?zone=TopNavBar, /sources?sortField=citescore
            Rule::path("sources", r"(?i)^/sources(?:\.uri)?$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /sourceid/21100773746
            Rule::path("source", r"(?i)^/sourceid/([0-9]+)$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.unitid = m.cap(1);
            }),
            // /affil/profile.uri?id=60018475
            Rule::path("affiliation", r"(?i)^/affil/profile\.uri$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.unitid = m.param("id");
            }),
            // /source/retrieveDocs.uri?sourceId=21100773746&year=2017
            Rule::path("source-docs", r"(?i)^/source/retrieveDocs\.uri$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.unitid = m.param("sourceId");
            }),
            // syndic8.scopus.com/action/manage?currentActivity=null
            Rule::path("manage", r"(?i)^/action/manage$", |_, r| {
                r.set_kind(ResourceType::Connection, MimeType::Misc);
            }),
            // blog.scopus.com/posts/check-out-citescore-tracker
            Rule::path("blog-post", r"(?i)^/posts/([A-Za-z0-9_-]+)$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.unitid = m.cap(1);
            }),
        ],
    )
});

#[derive(Debug, Default)]
pub struct ScopusPlatform;

impl ScopusPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for ScopusPlatform {
    fn id(&self) -> &'static str {
        "scopus"
    }

    fn name(&self) -> &'static str {
        "Scopus"
    }

    fn hosts(&self) -> &'static [&'static str] {
        SCOPUS_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::rules::classify_url;

    // ==================== Record Tests ====================

    #[test]
    fn test_scopus_record_display_is_abstract() {
        let record = classify_url(
            &RULES,
            "http://www.scopus.com/record/display.url?eid=2-s2.0-33644857527&origin=reflist",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.unitid.as_deref(), Some("2-s2.0-33644857527"));
    }

    #[test]
    fn test_scopus_record_variants() {
        let record = classify_url(
            &RULES,
            "http://www.scopus.com/record/references.url?origin=recordpage&currentRecordPageEID=2-s2.0-84880617481",
        );
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.unitid.as_deref(), Some("2-s2.0-84880617481"));

        let record = classify_url(
            &RULES,
            "https://www.scopus.com/record/pdfdownload.uri?eid=2-s2.0-84952777090",
        );
        assert_eq!(record.mime, Some(MimeType::Pdf));

        let record = classify_url(&RULES, "https://www.scopus.com/record/detail.uri");
        assert_eq!(record.rtype, Some(ResourceType::Bio));
        assert_eq!(record.unitid, None);
    }

    #[test]
    fn test_scopus_unknown_record_page_stays_empty() {
        assert!(classify_url(&RULES, "https://www.scopus.com/record/other.uri").is_empty());
    }

    // ==================== Other Page Tests ====================

    #[test]
    fn test_scopus_cited_by_and_print() {
        let record = classify_url(
            &RULES,
            "http://www.scopus.com/results/citedbyresults.url?sort=plf-f&cite=2-s2.0-84863856522",
        );
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.unitid.as_deref(), Some("2-s2.0-84863856522"));

        let record = classify_url(
            &RULES,
            "https://www.scopus.com/citation/print.uri?eid=2-s2.0-84952777090",
        );
        assert_eq!(record.mime, Some(MimeType::Print));
    }

    #[test]
    fn test_scopus_search_pages() {
        for path in ["/results/results.uri", "/sources.uri", "/sources"] {
            let url = format!("https://www.scopus.com{path}");
            assert_eq!(
                classify_url(&RULES, &url).rtype,
                Some(ResourceType::Search),
                "{path}"
            );
        }
    }

    #[test]
    fn test_scopus_source_and_blog() {
        let record = classify_url(&RULES, "https://www.scopus.com/sourceid/21100773746");
        assert_eq!(record.unitid.as_deref(), Some("21100773746"));

        let record = classify_url(
            &RULES,
            "https://www.scopus.com/source/retrieveDocs.uri?sourceId=21100773746&year=2017",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.unitid.as_deref(), Some("21100773746"));

        let record = classify_url(
            &RULES,
            "https://blog.scopus.com/posts/check-out-citescore-tracker",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.mime, Some(MimeType::Html));
    }
}
