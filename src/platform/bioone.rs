//! `BioOne` platform (`bioone.org`).
//!
//! Legacy DOIs embed an SICI such as `0091-7648(2006)34[1368:AEMECR]2.0.CO;2`,
//! whose leading ISSN becomes the print identifier.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static BIOONE_HOSTS: &[&str] = &["bioone.org"];

/// `prefix/suffix` from capture groups `prefix` and `suffix`.
fn joined_doi(m: &Match<'_>, prefix: usize, suffix: usize) -> Option<String> {
    Some(format!("{}/{}", m.group(prefix)?, m.group(suffix)?))
}

/// First `delimiter`-separated segment of capture group `index`.
fn leading_segment(m: &Match<'_>, index: usize, delimiter: char) -> Option<String> {
    m.group(index)?.split(delimiter).next().map(str::to_string)
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "bioone",
        vec![
            // /toc/ambi/40/8
            Rule::path("toc", r"(?i)^/toc/(([a-zA-Z]+)/[0-9]+/[0-9]+)$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Misc);
                r.title_id = m.cap(2);
                r.unitid = m.cap(1);
            }),
            // /doi/abs/10.1007/s13280-011-0207-8
            Rule::path("abs", r"(?i)^/doi/abs/(([0-9.]+)/([^/()]+))$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.unitid = m.cap(3);
                r.doi = m.cap(1);
            }),
            // /doi/abs/10.2193/0091-7648(2006)34[1368:AEMECR]2.0.CO;2
            Rule::path(
                "abs-sici",
                r"(?i)^/doi/abs/([0-9.]+)/(([0-9]{4}-[0-9]{3}([0-9Xx])?)\([0-9]+\)([^/)]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Html);
                    r.unitid = m.cap(2);
                    r.doi = joined_doi(m, 1, 2);
                    r.print_identifier = m.cap(3);
                },
            ),
            // /doi/full/10.1658/1402-2001(2007)10[3:ADSOFO]2.0.CO;2
            Rule::path(
                "full-sici",
                r"(?i)^/doi/full/([0-9.]+)/(([0-9]{4}-[0-9]{3}([0-9Xx])?)\([0-9]+\)([^/)]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.doi = joined_doi(m, 1, 2);
                    r.unitid = m.cap(2);
                    r.print_identifier = m.cap(3);
                },
            ),
            // /doi/full/10.2326/osj.12.35
            Rule::path(
                "full-dotted",
                r"(?i)^/doi/full/([0-9.]+)/(([^.]+.[^.]+.[^.]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.title_id = leading_segment(m, 2, '.');
                    r.doi = joined_doi(m, 1, 2);
                    r.unitid = m.cap(2);
                },
            ),
            // /doi/full/10.1111/j.1550-7408.2003.tb00099.x
            Rule::path(
                "full-issn",
                r"(?i)^/doi/full/([0-9.]+)/((j.([0-9]{4}-[0-9]{3}([0-9Xx])?)\.[^/)]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.doi = joined_doi(m, 1, 2);
                    r.unitid = m.cap(2);
                    r.print_identifier = m.cap(4);
                },
            ),
            // /doi/suppl/10.2108/zsj.30.901
            Rule::path("suppl", r"(?i)^/doi/suppl/([0-9.]+)/([^/)-]+)$", |m, r| {
                r.set_kind(ResourceType::Suppl, MimeType::Misc);
                r.title_id = leading_segment(m, 2, '.');
                r.doi = joined_doi(m, 1, 2);
                r.unitid = m.cap(2);
            }),
            // /doi/suppl/10.1111/j.1550-7408.2003.tb00099.x
            Rule::path(
                "suppl-issn",
                r"(?i)^/doi/suppl/([0-9.]+)/((j.([0-9]{4}-[0-9]{3}([0-9Xx])?)\.[^/)]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Suppl, MimeType::Misc);
                    r.doi = joined_doi(m, 1, 2);
                    r.unitid = m.cap(2);
                    r.print_identifier = m.cap(4);
                },
            ),
            // /doi/pdf/10.1637/j.0005-2086(2002)046[0025:SESEBI]2.0.CO;2
            Rule::path(
                "pdf-issn",
                r"(?i)^/doi/pdf/(([0-9.]+)/(j.([0-9]{4}-[0-9]{3}([0-9Xx])?)\.[^/)]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.doi = m.cap(1);
                    r.unitid = m.cap(3);
                    r.print_identifier = m.cap(4);
                },
            ),
            // /doi/pdf/10.1637/0005-2086(2002)046[0025:SESEBI]2.0.CO;2
            Rule::path(
                "pdf-sici",
                r"(?i)^/doi/pdf/([0-9.]+)/(([0-9]{4}-[0-9]{3}([0-9Xx])?)\([0-9]+\)([^/)]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.doi = joined_doi(m, 1, 2);
                    r.unitid = m.cap(2);
                    r.print_identifier = m.cap(3);
                },
            ),
            // /doi/pdf/10.1007/s11627-008-9148-8
            Rule::path("pdf", r"(?i)^/doi/pdf/([0-9.]+)/([^/()]+)$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.title_id = leading_segment(m, 2, '-');
                r.doi = joined_doi(m, 1, 2);
                r.unitid = m.cap(2);
            }),
            // /search?term=potato
            Rule::path("search", r"(?i)^/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Misc);
            }),
            // /browse/subject/Environmental-Sciences
            Rule::path("browse", r"(?i)^/browse", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Misc);
            }),
            // /journalArticle/Download?fullDOI=10.1600%2F036364419X697840
            Rule::path("download", r"(?i)^/journalArticle/Download$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.doi = m.param("fullDOI");
                r.unitid = m.param("fullDOI");
            }),
            // /journals/acta-chiropterologica/volume-20/issue-2
            Rule::path(
                "issue",
                r"(?i)^/journals/[a-zA-Z-]+/volume-[0-9]+/issue-[0-9]+$",
                |_, r| r.set_kind(ResourceType::Toc, MimeType::Html),
            ),
            // /journals/waterbirds/issues
            Rule::path("issues", r"(?i)^/journals/[a-zA-Z-]+/issues$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
            // /journals/waterbirds/issues/2018
            Rule::path(
                "issues-year",
                r"(?i)^/journals/[a-zA-Z-]+/issues/[0-9]+$",
                |_, r| r.set_kind(ResourceType::Toc, MimeType::Html),
            ),
            // /journals/Systematic-Botany/volume-44/issue-1/036364419X697840/Herbarium-Practices-and-Ethics-III/10.1600/036364419X697840.full
            Rule::path(
                "issue-article",
                r"(?i)^/journals/[a-zA-Z-]+/volume-[0-9]+/issue-[0-9]+/(.*)$",
                |_, r| r.set_kind(ResourceType::Article, MimeType::Html),
            ),
        ],
    )
});

/// `BioOne` journal platform.
#[derive(Debug, Default)]
pub struct BioOnePlatform;

impl BioOnePlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for BioOnePlatform {
    fn id(&self) -> &'static str {
        "bioone"
    }

    fn name(&self) -> &'static str {
        "BioOne"
    }

    fn hosts(&self) -> &'static [&'static str] {
        BIOONE_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
