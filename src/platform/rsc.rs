//! Royal Society of Chemistry platform (`pubs.rsc.org`, `rsc.org`).
//!
//! Issue listings carry the issue id and print ISSN in a `#!key=value` fragment.
//! Article and chapter DOIs are the RSC prefix plus the article code.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use super::utils::{strip_hyphens, with_doi_prefix};
use crate::record::{MimeType, ResourceType, ResultRecord};

/// DOI prefix registered to the Royal Society of Chemistry.
const RSC_DOI_PREFIX: &str = "10.1039";

static RSC_HOSTS: &[&str] = &["pubs.rsc.org", "rsc.org"];

fn rsc_doi(m: &Match<'_>, index: usize) -> Option<String> {
    m.group(index)
        .map(|code| with_doi_prefix(RSC_DOI_PREFIX, &code.to_lowercase()))
}

fn isbn_param(m: &Match<'_>) -> Option<String> {
    m.query("isbn").map(strip_hyphens)
}

fn format_token(m: &Match<'_>, r: &mut ResultRecord) {
    r.mime = m.group(1).and_then(MimeType::from_token);
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "rsc",
        vec![
            // /en/journals/journalissues/ay#!issueid=ay006014&type=current&issnprint=1759-9660
            Rule::path(
                "journal-issues",
                r"(?i)^/en/journals/journalissues/([a-zA-Z]{2,})$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Misc);
                    r.title_id = m.cap(1);
                    r.print_identifier = m.fragment_param("issnprint");
                    r.unitid = m.fragment_param("issueid");
                },
            ),
            // /en/content/articlehtml/2014/rp/c4rp00006d
            Rule::path(
                "article",
                r"(?i)^/en/content/article(html|pdf)/([0-9]+)/([a-z0-9]+)/([a-z0-9]+)$",
                |m, r| {
                    r.rtype = Some(ResourceType::Article);
                    format_token(m, r);
                    r.title_id = m.group(3).map(str::to_lowercase);
                    r.unitid = m.group(4).map(str::to_lowercase);
                    r.doi = rsc_doi(m, 4);
                    r.publication_date = m.cap(2);
                },
            ),
            // /en/content/ebook/978-1-84973-424-0#!divbookcontent
            Rule::path("ebook", r"(?i)^/en/content/ebook/([0-9-]+)$", |m, r| {
                let opens_content = m
                    .fragment_param("divbookcontent")
                    .is_some_and(|value| !value.is_empty());
                if m.has_fragment() && !opens_content {
                    r.rtype = Some(ResourceType::Toc);
                }
                r.mime = Some(MimeType::Misc);
                r.unitid = m.group(1).map(strip_hyphens);
                r.print_identifier = m.group(1).map(strip_hyphens);
            }),
            // /en/content/chapterpdf/2013/9781849734738-00001?isbn=978-1-84973-424-0&sercode=bk
            Rule::path(
                "chapter",
                r"(?i)^/en/content/chapter(html|pdf)/([0-9]+)/(([0-9]+)-[0-9]+)$",
                |m, r| {
                    r.rtype = Some(ResourceType::BookSection);
                    format_token(m, r);
                    r.unitid = m.cap(3);
                    r.doi = m.group(3).map(|code| with_doi_prefix(RSC_DOI_PREFIX, code));
                    r.online_identifier = m.cap(4);
                    r.publication_date = m.cap(2);
                    r.print_identifier = isbn_param(m);
                },
            ),
            // /en/content/articlelanding/2017/gc/c7gc01801k
            Rule::path(
                "article-landing",
                r"(?i)^/en/content/articlelanding/(.*)/(.*)/(.*)$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Html);
                    r.unitid = m.cap(3);
                    r.doi = m.group(3).map(|code| with_doi_prefix(RSC_DOI_PREFIX, code));
                },
            ),
            // /en/content/chapter/bk9780854042166-00118/978-0-85404-216-6
            Rule::path(
                "chapter-landing",
                r"(?i)^/en/content/chapter/[a-z]+([-0-9]+)/([-0-9]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Html);
                    r.unitid = m.cap(1);
                    r.print_identifier = m.group(2).map(strip_hyphens);
                },
            ),
            // /lus/analytical-abstracts/article/B377448
            Rule::path("lus-article", r"(?i)^/lus/[-a-z]+/article/(.*)$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.unitid = m.cap(1);
            }),
            // /en/content/chapterepub/2017/bk9781782621713-00060?isbn=978-1-78262-171-3
            Rule::path(
                "chapter-epub",
                r"(?i)^/en/content/chapterepub/(.*)/bk([-0-9]+)$",
                |m, r| {
                    r.set_kind(ResourceType::BookSection, MimeType::Misc);
                    r.unitid = m.cap(2);
                    r.publication_date = m.cap(1);
                    r.print_identifier = isbn_param(m);
                },
            ),
            // /lus/analytical-abstracts/search/quicksearch?afreetext=nanotechnology
            Rule::path("search", r"(?i)results|search", |m, r| {
                if m.pathname().to_lowercase().contains("downloadimage") {
                    r.set_kind(ResourceType::Image, MimeType::Misc);
                    r.unitid = m.param("id").filter(|id| !id.is_empty());
                } else {
                    r.set_kind(ResourceType::Search, MimeType::Html);
                }
            }),
            // /en/journals/issues
            Rule::path("journals", r"(?i)^/en/journals/", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
            // /news-events/profiles/2018/may/eloise-laity/
            Rule::path("profile", r"(?i)^/news-events/profiles/(.*?)/$", |m, r| {
                r.set_kind(ResourceType::Bio, MimeType::Html);
                r.unitid = m.cap(1);
            }),
            // /Merck-Index/reference/Glossary
            Rule::path("merck-index", r"(?i)^/Merck-Index/reference/", |_, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
            }),
            // /news-events/articles/2018/may/ib-moves-to-oup/
            Rule::path(
                "news-article",
                r"(?i)^/news-events/articles/((.*?)/(.*?)/(.*?))/$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.unitid = m.cap(1);
                    if let (Some(year), Some(month)) = (m.group(2), m.group(3)) {
                        r.publication_date = Some(format!("{year}/{month}"));
                    }
                },
            ),
            // /en/ebooks
            Rule::path("ebooks", r"(?i)^/en/ebooks$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
        ],
    )
});

/// Royal Society of Chemistry publishing platform.
#[derive(Debug, Default)]
pub struct RscPlatform;

impl RscPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for RscPlatform {
    fn id(&self) -> &'static str {
        "rsc"
    }

    fn name(&self) -> &'static str {
        "Royal Society of Chemistry"
    }

    fn hosts(&self) -> &'static [&'static str] {
        RSC_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
