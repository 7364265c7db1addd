//! EBSCOhost and EBSCO Discovery Service (`*.ebscohost.com`).
//!
//! Besides the `ehost`/`eds` interface pages this covers the content servers
//! and the `OpenURL` resolver, whose citation keys map straight onto record fields.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use super::utils::{LookupTable, lookup_title, strip_prefix_ignore_case};
use crate::record::{MimeType, ResourceType, ResultRecord};

static EBSCO_HOSTS: &[&str] = &["ebscohost.com"];

const DISCOVERY_SERVICE: &str = "EBSCO Discovery Service";

/// `defaultdb` codes of the login page.
const EBSCO_DATABASES: LookupTable = &[
    ("apn", "Alternative Press Index"),
    ("a9h", "Academic Search Complete"),
    ("31h", "America: History & Life with Full Text"),
    ("ant", "Anthropology Plus"),
    ("aft", "Art Full Text (H.W. Wilson)"),
    ("bah", "Business Source Alumni Edition"),
    ("cin20", "CINAHL"),
    ("dmp", "DynamedPlus"),
    ("nlebk", "eBook Collection"),
    ("eoh", "Econlit with Full Text"),
    ("eft", "Education Full Text (H.W. Wilson)"),
    ("eric", "ERIC"),
    ("hia", "Historical Abstracts"),
    (
        "hsr",
        "Humanities & Social Sciences Index Retrospective: 1907-1984 (H.W. Wilson)",
    ),
    ("qth", "LGBT Life w/Full Text"),
    (
        "lii",
        "Library Literature & Information Science Index (H.W. Wilson)",
    ),
    ("lih", "LISTA with Full Text"),
    ("cmedm", "MEDLINE"),
    ("loh", "Mental Measurements Yearbook"),
    ("mzh", "MLA International Bibliography"),
    ("pif", "The Philosopher's Index with Full Text"),
    ("pdh", "PsycARTICLES"),
    ("psyh", "PsycINFO"),
    ("pst", "PsycTESTS"),
    ("rgr", "Readers' Guide Retrospective: 1890-1982 (H.W. Wilson)"),
    ("rft", "RILM Abstracts of Music Literature with Full Text"),
    ("ssf", "Social Sciences Full Text (H.W. Wilson)"),
    ("sih", "SocINDEX with Full Text"),
    ("fyh", "Women's Studies International"),
    ("lsdar", "ATLA Religion Database with ATLASerials PLUS"),
    ("rvh", "New Testament Abstracts"),
    ("oah", "Old Testament Abstracts"),
];

/// Non-empty value of an `OpenURL` key.
fn openurl_value(m: &Match<'_>, key: &str) -> Option<String> {
    m.query(key).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Maps `OpenURL` citation keys onto the record. `pages=372-379` overrides
/// `spage`, and an `id=DOI:...` becomes both `doi` and `unitid`.
fn apply_openurl(m: &Match<'_>, r: &mut ResultRecord) {
    r.print_identifier = openurl_value(m, "issn").or_else(|| openurl_value(m, "isbn"));
    r.vol = openurl_value(m, "volume");
    r.issue = openurl_value(m, "issue");
    r.first_page = openurl_value(m, "spage");
    r.publication_title = openurl_value(m, "title");
    r.unitid = openurl_value(m, "id");

    if let Some((first, last)) = m.query("pages").and_then(|pages| pages.split_once('-')) {
        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if numeric(first) && numeric(last) {
            r.first_page = Some(first.to_string());
            r.last_page = Some(last.to_string());
        }
    }

    let doi = r
        .unitid
        .as_deref()
        .and_then(|id| strip_prefix_ignore_case(id, "doi:"))
        .map(str::to_string);
    if let Some(doi) = doi {
        r.unitid = Some(doi.clone());
        r.doi = Some(doi);
    }
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "ebscohost",
        vec![
            // /ehost/results?sid=...&bquery=JN+%22Computers+in+Libraries%22
            // /ehost/detail/detail?vid=4&sid=...#AN=118470727&db=a9h
            Rule::path(
                "interface",
                r"(?i)^/(ehost|eds)/([a-z]+)(?:/[a-z]+)?$",
                |m, r| {
                    if m.group(1).is_some_and(|i| i.eq_ignore_ascii_case("eds")) {
                        r.platform_name = Some(DISCOVERY_SERVICE.to_string());
                    }
                    let category = m.group(2).map(str::to_ascii_lowercase);
                    match category.as_deref() {
                        Some("results" | "resultsadvanced") => {
                            r.set_kind(ResourceType::Toc, MimeType::Misc);
                        }
                        Some("ebookviewer") => r.set_kind(ResourceType::Book, MimeType::Pdf),
                        Some("pdfviewer") => r.set_kind(ResourceType::Article, MimeType::Pdf),
                        Some("search") => r.set_kind(ResourceType::Search, MimeType::Misc),
                        Some("detail") => {
                            r.set_kind(ResourceType::Ref, MimeType::Html);
                            r.unitid = m.fragment_param("AN");
                        }
                        _ => {}
                    }
                },
            ),
            // /pdf29_30/pdf/2013/CLB/01Sep13/90496319.pdf?T=P&P=AN&K=2012317464
            Rule::path(
                "content-pdf",
                r"(?i)^/pdf[a-z0-9_]*/pdf/\S+/([a-z0-9]+)\.pdf$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.unitid = m.cap(1);
                },
            ),
            // /ContentServer.asp?T=P&P=AN&K=96283258&S=R&D=aph
            Rule::path("content-server", r"(?i)^/contentserver\.asp$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.unitid = m.param("K");
            }),
            // /openurl?sid=EBSCO:a9h&genre=article&issn=0399077X&volume=46&issue=7&spage=372&id=DOI:10.1016/j.medmal.2016.06.002
            Rule::path("openurl", r"(?i)^/openurl$", |m, r| {
                r.set_kind(ResourceType::Openurl, MimeType::Html);
                apply_openurl(m, r);
            }),
            // /login.aspx?authtype=ip,uid&profile=ehost&defaultdb=apn
            Rule::path("login", r"(?i)^/(login\.aspx|start)$", |m, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
                r.publication_title = m
                    .query("defaultdb")
                    .and_then(|db| lookup_title(EBSCO_DATABASES, db));
            }),
        ],
    )
});

/// EBSCOhost research databases.
#[derive(Debug, Default)]
pub struct EbscoPlatform;

impl EbscoPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for EbscoPlatform {
    fn id(&self) -> &'static str {
        "ebscohost"
    }

    fn name(&self) -> &'static str {
        "EBSCOhost"
    }

    fn hosts(&self) -> &'static [&'static str] {
        EBSCO_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::rules::classify_url;

    // ==================== Interface Tests ====================

    #[test]
    fn test_ebsco_interface_categories() {
        let cases = [
            ("/ehost/resultsadvanced", ResourceType::Toc, MimeType::Misc),
            ("/ehost/ebookviewer/ebook", ResourceType::Book, MimeType::Pdf),
            ("/ehost/pdfviewer/pdfviewer", ResourceType::Article, MimeType::Pdf),
            ("/ehost/search/basic", ResourceType::Search, MimeType::Misc),
        ];
        for (path, rtype, mime) in cases {
            let record = classify_url(&RULES, &format!("https://web.ebscohost.com{path}?vid=1"));
            assert_eq!(record.rtype, Some(rtype), "path {path}");
            assert_eq!(record.mime, Some(mime), "path {path}");
            assert_eq!(record.platform_name, None);
        }
    }

    #[test]
    fn test_ebsco_detail_reads_accession_number_from_fragment() {
        let record = classify_url(
            &RULES,
            "https://web.ebscohost.com/ehost/detail/detail?vid=4&hid=4201#AN=118470727&db=a9h",
        );
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.unitid.as_deref(), Some("118470727"));
    }

    #[test]
    fn test_ebsco_detail_without_fragment_has_no_unitid() {
        let record = classify_url(&RULES, "https://web.ebscohost.com/ehost/detail?vid=1");
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.unitid, None);
    }

    #[test]
    fn test_ebsco_discovery_service_platform_name() {
        let record = classify_url(&RULES, "https://eds.b.ebscohost.com/eds/results?vid=2");
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.platform_name.as_deref(), Some(DISCOVERY_SERVICE));
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_ebsco_content_pdf_and_server() {
        let record = classify_url(
            &RULES,
            "https://content.ebscohost.com/pdf29_30/pdf/2013/CLB/01Sep13/90496319.pdf?T=P&P=AN",
        );
        assert_eq!(record.unitid.as_deref(), Some("90496319"));

        let record = classify_url(
            &RULES,
            "http://content.ebscohost.com/ContentServer.asp?T=P&P=AN&K=96283258&S=R&D=aph",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.unitid.as_deref(), Some("96283258"));
    }

    // ==================== OpenURL Tests ====================

    #[test]
    fn test_ebsco_openurl_maps_citation_keys() {
        let record = classify_url(
            &RULES,
            "http://search.ebscohost.com/openurl?sid=EBSCO:a9h&genre=article&issn=0399077X&ISBN=&volume=46&issue=7&date=20161001&spage=372&pages=372-379&title=Medecine&id=DOI:10.1016/j.medmal.2016.06.002",
        );
        assert_eq!(record.rtype, Some(ResourceType::Openurl));
        assert_eq!(record.print_identifier.as_deref(), Some("0399077X"));
        assert_eq!(record.vol.as_deref(), Some("46"));
        assert_eq!(record.issue.as_deref(), Some("7"));
        assert_eq!(record.first_page.as_deref(), Some("372"));
        assert_eq!(record.last_page.as_deref(), Some("379"));
        assert_eq!(record.publication_title.as_deref(), Some("Medecine"));
        assert_eq!(record.doi.as_deref(), Some("10.1016/j.medmal.2016.06.002"));
        assert_eq!(record.unitid, record.doi);
    }

    #[test]
    fn test_ebsco_openurl_plain_id_is_not_doi() {
        let record = classify_url(&RULES, "http://search.ebscohost.com/openurl?id=12345&pages=12");
        assert_eq!(record.unitid.as_deref(), Some("12345"));
        assert_eq!(record.doi, None);
        assert_eq!(record.last_page, None);
    }

    #[test]
    fn test_ebsco_openurl_non_ascii_id() {
        let record = classify_url(&RULES, "http://search.ebscohost.com/openurl?id=abc%C3%A9");
        assert_eq!(record.unitid.as_deref(), Some("abcé"));
        assert_eq!(record.doi, None);

        let record = classify_url(&RULES, "http://search.ebscohost.com/openurl?id=doi:10.1/%C3%A9t%C3%A9");
        assert_eq!(record.doi.as_deref(), Some("10.1/été"));
    }

    // ==================== Login Tests ====================

    #[test]
    fn test_ebsco_login_looks_up_database() {
        let record = classify_url(
            &RULES,
            "http://search.ebscohost.com/login.aspx?authtype=ip,uid&profile=ehost&defaultdb=cmedm",
        );
        assert_eq!(record.rtype, Some(ResourceType::Search));
        assert_eq!(record.publication_title.as_deref(), Some("MEDLINE"));

        let record = classify_url(&RULES, "http://search.ebscohost.com/login.aspx?defaultdb=zzz");
        assert_eq!(record.rtype, Some(ResourceType::Search));
        assert_eq!(record.publication_title, None);
    }
}
