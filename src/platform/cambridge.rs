//! Cambridge University Press (`cambridge.org`, `journals.cambridge.org`).
//!
//! Legacy journal URLs are `/action/<name>?jid=...&fileId=...`. Proxies often
//! wrap them as `?url=<target>`; the embedded target is what gets classified.
//! A `fileId` such as `S0952523810000179` is the article PII: its digits 1-8
//! are the print ISSN and `10.1017/` plus the whole id is the DOI.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use super::utils::with_doi_prefix;
use crate::record::{MimeType, ResourceType, ResultRecord};

/// DOI prefix registered to Cambridge University Press.
pub const CUP_DOI_PREFIX: &str = "10.1017/";

static CUP_HOSTS: &[&str] = &["cambridge.org"];

const ACTIONS: &[&str] = &[
    "displayJournal",
    "displayJournalTab",
    "displayIssue",
    "displayFulltext",
    "displayAbstract",
];

/// Fields every matched URL carries: the journal code and the `fileId`
/// identifiers. A `fileId` containing `|` is a pre-click placeholder and ignored.
fn common_fields(m: &Match<'_>, r: &mut ResultRecord) {
    if let Some(file_id) = m.query("fileId").filter(|id| !id.contains('|')) {
        let issn_part = |skip: usize| file_id.chars().skip(skip).take(4).collect::<String>();
        r.print_identifier = Some(format!("{}-{}", issn_part(1), issn_part(5)));
        r.unitid = Some(file_id.to_string());
    }
    r.title_id = m.param("jid");
}

fn file_doi(m: &Match<'_>) -> Option<String> {
    m.query("fileId")
        .map(|file_id| with_doi_prefix(CUP_DOI_PREFIX, file_id))
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "cup",
        vec![
            // /action/displayIssue?decade=2010&jid=VNS&volumeId=27&issueId=3-4&iid=7880012
            Rule::path("action", r"(?i)/action/([a-z]+)", |m, r| {
                common_fields(m, r);
                match m.group(1) {
                    Some("displayJournal") => {
                        r.unitid = m.param("jid");
                        r.set_kind(ResourceType::Toc, MimeType::Misc);
                    }
                    Some("displayJournalTab") => r.set_kind(ResourceType::Toc, MimeType::Misc),
                    Some("displayIssue") => {
                        r.set_kind(ResourceType::Toc, MimeType::Misc);
                        r.unitid = m.param("iid");
                        r.vol = m.param("volumeId");
                        r.issue = m.param("issueId");
                    }
                    Some("displayFulltext") if m.query("pdftype").is_some_and(|v| !v.is_empty()) => {
                        r.set_kind(ResourceType::Article, MimeType::Pdf);
                        r.unitid = m.param("aid");
                        r.vol = m.param("volumeId");
                        r.issue = m.param("issueId");
                    }
                    Some("displayFulltext") => {
                        r.set_kind(ResourceType::Article, MimeType::Html);
                        if r.unitid.is_none() {
                            r.unitid = m.param("aid");
                        }
                        r.vol = m.param("volumeId");
                        r.issue = m.param("issueId");
                        r.doi = file_doi(m);
                    }
                    Some("displayAbstract") => {
                        r.set_kind(ResourceType::Abs, MimeType::Html);
                        r.doi = file_doi(m);
                    }
                    _ => {}
                }
            })
            .when(|m| m.group(1).is_some_and(|action| ACTIONS.contains(&action))),
            // Any other action ends evaluation with an empty record.
            Rule::path("unknown-action", r"(?i)/action/[a-z]+", |_, _| {}),
            // /core/services/aop-cambridge-core/content/view/A95C.../S1053837209990411a.pdf/old_generation.pdf
            Rule::path(
                "core-article-pdf",
                r"(?i)^/core/services/aop-cambridge-core/content/view/[a-z0-9]+/([a-z0-9.]+)[a-z]\.pdf/",
                |m, r| {
                    common_fields(m, r);
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.unitid = m.cap(1);
                    r.pii = m.cap(1);
                },
            ),
            // /core/journals/journal-of-the-history-of-economic-thought/article/old-generation/A95C.../core-reader
            // /core/journals/journal-of-the-history-of-economic-thought/issue/CF230263144D4D
            Rule::path(
                "core-journal",
                r"(?i)^/core/journals/([a-z-]+)/(article|issue)/([a-z0-9-]+)",
                |m, r| {
                    common_fields(m, r);
                    r.title_id = m.cap(1);
                    if m.group(2).is_some_and(|kind| kind.eq_ignore_ascii_case("issue")) {
                        r.set_kind(ResourceType::Toc, MimeType::Misc);
                        r.unitid = m.group(1).map(|journal| format!("{journal}/issue/"));
                    } else {
                        r.set_kind(ResourceType::Article, MimeType::Html);
                        r.unitid = m.cap(3);
                    }
                },
            ),
            // /core/books/cambridge-companion-to-literature-and-science/C5374AB01C8B18E3B0FC30BAADCC47E4
            Rule::path("core-book", r"(?i)^/core/books/([a-z-]+)/([A-Z0-9]+)$", |m, r| {
                common_fields(m, r);
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(2);
            }),
            // /core/services/aop-cambridge-core/content/view/EBAE.../9781107079724pre_i-iv.pdf
            Rule::path(
                "core-book-pdf",
                r"(?i)^/core/services/([a-z-]+)/content/view/[A-Z0-9]+/([0-9]+)([a-z0-9_-]+)\.pdf",
                |m, r| {
                    common_fields(m, r);
                    r.set_kind(ResourceType::BookSection, MimeType::Pdf);
                    r.print_identifier = m.cap(2);
                    let section = m
                        .group(2)
                        .zip(m.group(3))
                        .map(|(isbn, rest)| format!("{isbn}{rest}"));
                    r.title_id.clone_from(&section);
                    r.unitid = section;
                },
            ),
            // /core/books/cambridge-companion-to-literature-and-science/snapshots-of-the-past/282F.../core-reader
            Rule::path(
                "core-book-reader",
                r"(?i)^/core/books/(([a-z-]+)/([a-z-]+)/([A-Z0-9]+))/core-reader$",
                |m, r| {
                    common_fields(m, r);
                    r.set_kind(ResourceType::BookSection, MimeType::Html);
                    r.title_id = m
                        .group(2)
                        .zip(m.group(3))
                        .map(|(book, chapter)| format!("{book}/{chapter}"));
                    r.unitid = m.cap(4);
                },
            ),
            // /core/what-we-publish/collections/cambridge-companions/listing?q=faust
            Rule::path("listing", r"(?i)listing$", |m, r| {
                common_fields(m, r);
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
        ],
    )
    .with_url_override("url")
});

/// Cambridge Core and the legacy Cambridge Journals Online.
#[derive(Debug, Default)]
pub struct CambridgePlatform;

impl CambridgePlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for CambridgePlatform {
    fn id(&self) -> &'static str {
        "cup"
    }

    fn name(&self) -> &'static str {
        "Cambridge University Press"
    }

    fn hosts(&self) -> &'static [&'static str] {
        CUP_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::DecomposedUrl;
    use crate::platform::rules::classify_url;
    use crate::record::AccessRecord;

    // ==================== Legacy Action Tests ====================

    #[test]
    fn test_cup_display_issue() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/displayIssue?decade=2010&jid=VNS&volumeId=27&issueId=3-4&iid=7880012",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.mime, Some(MimeType::Misc));
        assert_eq!(record.title_id.as_deref(), Some("VNS"));
        assert_eq!(record.unitid.as_deref(), Some("7880012"));
        assert_eq!(record.vol.as_deref(), Some("27"));
        assert_eq!(record.issue.as_deref(), Some("3-4"));
    }

    #[test]
    fn test_cup_fulltext_html_uses_file_id() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/displayFulltext?type=6&fid=7880026&jid=VNS&volumeId=27&issueId=3-4&aid=7880025&fulltextType=RA&fileId=S0952523810000179",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(record.unitid.as_deref(), Some("S0952523810000179"));
        assert_eq!(record.print_identifier.as_deref(), Some("0952-5238"));
        assert_eq!(record.doi.as_deref(), Some("10.1017/S0952523810000179"));
    }

    #[test]
    fn test_cup_fulltext_pdf_uses_article_id() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/displayFulltext?type=1&pdftype=1&fid=7880027&jid=VNS&volumeId=27&issueId=3-4&aid=7880025",
        );
        assert_eq!(record.mime, Some(MimeType::Pdf));
        assert_eq!(record.unitid.as_deref(), Some("7880025"));
        assert_eq!(record.doi, None);
    }

    #[test]
    fn test_cup_abstract_doi() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/displayAbstract?fromPage=online&aid=9010487&fileId=S0952523813000345",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.doi.as_deref(), Some("10.1017/S0952523813000345"));
    }

    #[test]
    fn test_cup_placeholder_file_id_is_ignored() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/displayFulltext?aid=7880025&fileId=S09525238|1",
        );
        assert_eq!(record.unitid.as_deref(), Some("7880025"));
        assert_eq!(record.print_identifier, None);
    }

    #[test]
    fn test_cup_empty_pdftype_is_html() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/displayFulltext?pdftype=&aid=7880025&fileId=S0952523810000179",
        );
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(record.doi.as_deref(), Some("10.1017/S0952523810000179"));
    }

    #[test]
    fn test_cup_unknown_action_stops_evaluation() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/somethinglisting?jid=VNS",
        );
        assert!(record.is_empty());
        let url = DecomposedUrl::new("/action/somethinglisting");
        let rule = RULES.matching_rule(&url, &AccessRecord::new()).unwrap();
        assert_eq!(rule, Some("unknown-action"));
    }

    #[test]
    fn test_cup_unknown_action_is_empty() {
        let record = classify_url(
            &RULES,
            "http://journals.cambridge.org/action/login?jid=VNS&fileId=S0952523810000179",
        );
        assert!(record.is_empty());
    }

    #[test]
    fn test_cup_url_override_classifies_embedded_target() {
        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/login?url=http%3A%2F%2Fjournals.cambridge.org%2Faction%2FdisplayJournal%3Fjid%3DVNS",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.unitid.as_deref(), Some("VNS"));
        assert_eq!(record.title_id.as_deref(), Some("VNS"));
    }

    // ==================== Core Tests ====================

    #[test]
    fn test_cup_core_article_pdf_pii() {
        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/services/aop-cambridge-core/content/view/A95C410BA1767D60C3DA96901466AABD/S1053837209990411a.pdf/old_generation.pdf",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.mime, Some(MimeType::Pdf));
        assert_eq!(record.pii.as_deref(), Some("S1053837209990411"));
    }

    #[test]
    fn test_cup_core_journal_article_and_issue() {
        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/journals/journal-of-the-history-of-economic-thought/article/old-generation-of-economists/A95C410BA1767D60C3DA96901466AABD/core-reader",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.unitid.as_deref(), Some("old-generation-of-economists"));
        assert_eq!(
            record.title_id.as_deref(),
            Some("journal-of-the-history-of-economic-thought")
        );

        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/journals/journal-of-the-history-of-economic-thought/issue/CF230263144D4D",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(
            record.unitid.as_deref(),
            Some("journal-of-the-history-of-economic-thought/issue/")
        );
    }

    #[test]
    fn test_cup_core_book_shapes() {
        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/books/cambridge-companion-to-literature-and-science/C5374AB01C8B18E3B0FC30BAADCC47E4",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.unitid.as_deref(), Some("C5374AB01C8B18E3B0FC30BAADCC47E4"));

        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/services/aop-cambridge-core/content/view/EBAE0C3BE30489B1FB3FD9F3C0A6BFF0/9781107079724pre_i-iv.pdf",
        );
        assert_eq!(record.rtype, Some(ResourceType::BookSection));
        assert_eq!(record.unitid.as_deref(), Some("9781107079724pre_i-iv"));

        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/books/cambridge-companion-to-literature-and-science/snapshots-of-the-past/282F6D92996735EEE8E70BFBED86430B/core-reader",
        );
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(
            record.title_id.as_deref(),
            Some("cambridge-companion-to-literature-and-science/snapshots-of-the-past")
        );
    }

    #[test]
    fn test_cup_listing_is_search() {
        let record = classify_url(
            &RULES,
            "https://www.cambridge.org/core/what-we-publish/collections/cambridge-companions/listing?q=faust",
        );
        assert_eq!(record.rtype, Some(ResourceType::Search));
    }
}
