//! MIT Press platform: `mitpressjournals.org`, `cognet.mit.edu`, `mitpress.mit.edu`
//! and the Leonardo almanac sites.
//!
//! DOI-bearing paths carry the full DOI (`/doi/full/10.1162/...`); the CogNet
//! PDF viewer carries only the suffix, which is completed with [`MIT_DOI_PREFIX`].

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use super::utils::with_doi_prefix;
use crate::record::{MimeType, ResourceType};

/// DOI prefix registered to MIT Press.
const MIT_DOI_PREFIX: &str = "10.1162/";

static MIT_HOSTS: &[&str] = &[
    "mitpressjournals.org",
    "direct.mit.edu",
    "cognet.mit.edu",
    "mitpress.mit.edu",
    "contemporaryarts.mit.edu",
    "leoalmanac.org",
];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "mit",
        vec![
            // /search?keywords=potato
            Rule::path("search", r"(?i)^/search", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /action/doSearch?AllField=potato
            Rule::path("do-search", r"(?i)^/action/doSearch$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /?s=art
            Rule::always("search-query", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            })
            .when(|m| m.params().len() == 1 && m.has_param("s")),
            // /toc/daed/145/3
            Rule::path("toc", r"(?i)^/toc/(.*)$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /loi/daed
            Rule::path("loi", r"(?i)^/loi/(.*)$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /journal/10.1162/jocn.2009.21112
            Rule::path(
                "journal-doi",
                r"(?i)^/journal/(([0-9]{2}\.[0-9]{4})/([a-zA-Z]+\.[0-9]+\.[0-9]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.unitid = m.cap(1);
                    r.doi = m.cap(1);
                    r.title_id = m.cap(3);
                },
            ),
            // /doi/full/10.1162/DAED_a_00392
            Rule::path(
                "doi-full",
                r"(?i)^/doi/full/(([0-9]{2}\.[0-9]{4})/([0-9a-zA-Z_.]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.unitid = m.cap(1);
                    r.doi = m.cap(1);
                    r.title_id = m.cap(3);
                },
            ),
            // /pub/0hm1gas
            Rule::path("pub", r"(?i)^/pub/([0-9a-zA-Z-]+)$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /pdfviewer/journal/jocn.2009.21112
            Rule::path(
                "pdfviewer",
                r"(?i)^/pdfviewer/journal/([0-9a-zA-Z.]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    let doi = m.group(1).map(|suffix| with_doi_prefix(MIT_DOI_PREFIX, suffix));
                    r.unitid.clone_from(&doi);
                    r.doi = doi;
                    r.title_id = m.cap(1);
                },
            ),
            // /doi/pdf/10.1162/DAED_a_00392
            Rule::path(
                "doi-pdf",
                r"(?i)^/doi/pdf/(([0-9]{2}\.[0-9]{4})/([0-9a-zA-Z_.]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.unitid = m.cap(1);
                    r.doi = m.cap(1);
                    r.title_id = m.cap(3);
                },
            ),
            // /wp-content/uploads/2012/12/ISEA2011Uncontainable-Not-There.pdf
            Rule::path(
                "wp-upload",
                r"(?i)^/wp-content/uploads/[0-9]{4}/[0-9]{2}/(.*)\.pdf$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.unitid = m.cap(1);
                    r.title_id = m.cap(1);
                },
            ),
            // /erefschapter/preface-to-first-edition-0
            Rule::path("erefs-chapter", r"(?i)^/erefschapter/(.*)$", |m, r| {
                r.set_kind(ResourceType::BookSection, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /system/cogfiles/books/9780262329828/pdfs/9780262329828_chap3.pdf
            Rule::path(
                "cogfiles-chapter",
                r"(?i)^/system/cogfiles/books/([0-9]+)/pdfs/(.*)\.pdf$",
                |m, r| {
                    r.set_kind(ResourceType::BookSection, MimeType::Pdf);
                    r.unitid = m.cap(2);
                    r.print_identifier = m.cap(1);
                },
            ),
        ],
    )
});

/// MIT Press journals, `CogNet` and Leonardo.
#[derive(Debug, Default)]
pub struct MitPressPlatform;

impl MitPressPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for MitPressPlatform {
    fn id(&self) -> &'static str {
        "mit"
    }

    fn name(&self) -> &'static str {
        "MIT Press"
    }

    fn hosts(&self) -> &'static [&'static str] {
        MIT_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::platform::rules::classify_url;

    #[test]
    fn test_mit_doi_full_is_html_article() {
        let record = classify_url(
            &RULES,
            "https://www.mitpressjournals.org/doi/full/10.1162/DAED_a_00392",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(record.unitid.as_deref(), Some("10.1162/DAED_a_00392"));
        assert_eq!(record.doi.as_deref(), Some("10.1162/DAED_a_00392"));
        assert_eq!(record.title_id.as_deref(), Some("DAED_a_00392"));
    }

    #[test]
    fn test_mit_search_has_no_identifiers() {
        let record = classify_url(&RULES, "https://mitpress.mit.edu/search");
        assert_eq!(record.rtype, Some(ResourceType::Search));
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(record.unitid, None);
        assert_eq!(record.title_id, None);
        assert_eq!(record.doi, None);
    }

    #[test]
    fn test_mit_single_s_param_is_search() {
        let record = classify_url(&RULES, "https://www.leoalmanac.org/?s=art");
        assert_eq!(record.rtype, Some(ResourceType::Search));

        let record = classify_url(&RULES, "https://www.leoalmanac.org/?s=art&page=2");
        assert!(record.is_empty());
    }

    #[test]
    fn test_mit_toc_uses_remaining_path() {
        let record = classify_url(&RULES, "https://www.mitpressjournals.org/toc/daed/145/3");
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.title_id.as_deref(), Some("daed/145/3"));
    }

    #[test]
    fn test_mit_pdfviewer_prepends_doi_prefix() {
        let record = classify_url(
            &RULES,
            "http://cognet.mit.edu/pdfviewer/journal/jocn.2009.21112",
        );
        assert_eq!(record.mime, Some(MimeType::Pdf));
        assert_eq!(record.doi.as_deref(), Some("10.1162/jocn.2009.21112"));
        assert_eq!(record.unitid, record.doi);
        assert_eq!(record.title_id.as_deref(), Some("jocn.2009.21112"));
    }

    #[test]
    fn test_mit_cogfiles_chapter() {
        let record = classify_url(
            &RULES,
            "http://cognet.mit.edu/system/cogfiles/books/9780262329828/pdfs/9780262329828_chap3.pdf",
        );
        assert_eq!(record.rtype, Some(ResourceType::BookSection));
        assert_eq!(record.unitid.as_deref(), Some("9780262329828_chap3"));
        assert_eq!(record.print_identifier.as_deref(), Some("9780262329828"));
    }

    #[test]
    fn test_mit_unknown_path_is_empty() {
        assert!(classify_url(&RULES, "https://www.mitpressjournals.org/about/contact").is_empty());
    }
}
