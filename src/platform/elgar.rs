//! Elgaronline (`elgaronline.com`).
//!
//! Book chapters are addressed as `<isbn>.<chapter>`; the ISBN alone is the title id.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use crate::record::{MimeType, ResourceType, ResultRecord};

static ELGAR_HOSTS: &[&str] = &["elgaronline.com"];

/// Chapter of a book: title id `isbn`, unit id `isbn.chapter`.
fn chapter(m: &Match<'_>, isbn: usize, section: usize, mime: MimeType, r: &mut ResultRecord) {
    r.set_kind(ResourceType::BookSection, mime);
    r.title_id = m.cap(isbn);
    r.unitid = m
        .group(isbn)
        .zip(m.group(section))
        .map(|(isbn, section)| format!("{isbn}.{section}"));
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "elgar",
        vec![
            // /browse?pageSize=10&level=parent&t0=Economics_Main_ID
            Rule::path("browse", r"(?i)^/browse$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /search?type_0=series&q_0=Leuven%20Global%20Governance%20series
            Rule::path("search", r"(?i)^/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /abstract/9780857933881.xml
            Rule::path("book-abstract", r"(?i)^/abstract/([0-9]+)\.xml$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Xml);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /abstract/journals/roke/5-4/roke.2017.04.01.xml
            Rule::path(
                "journal-abstract",
                r"(?i)^/abstract/journals/([a-zA-Z0-9_/-]+)/([a-zA-Z0-9.-]+)\.xml$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Xml);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(2);
                },
            ),
            // /abstract/Research_Reviews/9781786438904/9781786438904.xml
            Rule::path(
                "review-abstract",
                r"(?i)^/abstract/Research_Reviews/([a-zA-Z0-9_/-]+)/([a-zA-Z0-9.-]+)\.xml$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Xml);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(2);
                },
            ),
            // /view/journals/roke/5-4/roke.2017.5.issue-4.xml
            Rule::path(
                "journal-issue",
                r"(?i)^/view/journals/([a-zA-Z0-9_/-]+)/([a-zA-Z0-9.-]+)\.xml$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Xml);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(2);
                },
            ),
            // /view/Research_Reviews/9781785367441/9781785367441.xml
            Rule::path(
                "view-document",
                r"(?i)^/view/([a-zA-Z0-9_/-]+)/([a-zA-Z0-9-]+)\.xml$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Xml);
                    r.title_id = m.cap(2);
                    r.unitid = m.cap(2);
                },
            ),
            // /view/nlm-book/9781849807777/c04_sec85.xml
            Rule::path(
                "nlm-book-section",
                r"(?i)^/view/nlm-book/([0-9]+)/([a-zA-Z0-9_-]+)\.xml$",
                |m, r| {
                    r.set_kind(ResourceType::BookSection, MimeType::Html);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(2);
                },
            ),
            // /view/9781784711450.00017.xml
            Rule::path("chapter", r"(?i)^/view/([0-9]+)\.([0-9]+)\.xml$", |m, r| {
                chapter(m, 1, 2, MimeType::Xml, r);
            }),
            // /view/edcoll/9781786439307/9781786439307.00019.xml
            Rule::path(
                "collection-chapter",
                r"(?i)^/view/([a-zA-Z0-9_/-]+)/([0-9]+)\.([0-9]+)\.xml$",
                |m, r| chapter(m, 2, 3, MimeType::Xml, r),
            ),
            // /downloadpdf/9781784711450.00014.pdf
            Rule::path("chapter-pdf", r"(?i)^/downloadpdf/([0-9]+)\.([0-9]+)\.pdf$", |m, r| {
                chapter(m, 1, 2, MimeType::Pdf, r);
            }),
            // /downloadpdf/edcoll/9781786439307/9781786439307.00019.pdf
            Rule::path(
                "collection-chapter-pdf",
                r"(?i)^/downloadpdf/([a-zA-Z0-9_/-]+)/([0-9]+)\.([0-9]+)\.pdf$",
                |m, r| chapter(m, 2, 3, MimeType::Pdf, r),
            ),
        ],
    )
});

/// Edward Elgar Publishing books and journals.
#[derive(Debug, Default)]
pub struct ElgarPlatform;

impl ElgarPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for ElgarPlatform {
    fn id(&self) -> &'static str {
        "elgar"
    }

    fn name(&self) -> &'static str {
        "Elgaronline"
    }

    fn hosts(&self) -> &'static [&'static str] {
        ELGAR_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::rules::classify_url;

    const BASE: &str = "https://www.elgaronline.com";

    fn classify(path: &str) -> ResultRecord {
        classify_url(&RULES, &format!("{BASE}{path}"))
    }

    #[test]
    fn test_elgar_abstracts_are_xml() {
        let record = classify("/abstract/9780857933881.xml?rskey=ZoQNp7&result=2");
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.mime, Some(MimeType::Xml));
        assert_eq!(record.unitid.as_deref(), Some("9780857933881"));

        let record = classify("/abstract/journals/roke/5-4/roke.2017.04.01.xml");
        assert_eq!(record.title_id.as_deref(), Some("roke/5-4"));
        assert_eq!(record.unitid.as_deref(), Some("roke.2017.04.01"));
    }

    #[test]
    fn test_elgar_journal_issue_is_toc() {
        let record = classify("/view/journals/roke/5-4/roke.2017.5.issue-4.xml");
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.unitid.as_deref(), Some("roke.2017.5.issue-4"));
    }

    #[test]
    fn test_elgar_view_document_and_nlm_section() {
        let record = classify("/view/Research_Reviews/9781785367441/9781785367441.xml");
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.title_id.as_deref(), Some("9781785367441"));

        let record = classify("/view/nlm-book/9781849807777/c04_sec85.xml");
        assert_eq!(record.rtype, Some(ResourceType::BookSection));
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(record.unitid.as_deref(), Some("c04_sec85"));
    }

    #[test]
    fn test_elgar_chapters_join_isbn_and_section() {
        let record = classify("/view/9781784711450.00017.xml");
        assert_eq!(record.title_id.as_deref(), Some("9781784711450"));
        assert_eq!(record.unitid.as_deref(), Some("9781784711450.00017"));

        let record = classify("/view/edcoll/9781786439307/9781786439307.00019.xml");
        assert_eq!(record.unitid.as_deref(), Some("9781786439307.00019"));

        let record = classify("/downloadpdf/edcoll/9781786439307/9781786439307.00019.pdf");
        assert_eq!(record.mime, Some(MimeType::Pdf));
        assert_eq!(record.rtype, Some(ResourceType::BookSection));
    }

    #[test]
    fn test_elgar_skeleton_paths_are_not_recognized() {
        assert!(classify("/platform/path/to/document-123456-test.pdf").is_empty());
    }
}
