//! Annual Reviews platform (`annualreviews.org`).
//!
//! Every article DOI is `10.1146/annurev-<journal>-...`, so the journal code is
//! read out of the DOI itself.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static AR_HOSTS: &[&str] = &["annualreviews.org"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "ar",
        vec![
            // /journal/achre4, /toc/achre4/current
            Rule::path(
                "journal-toc",
                r"^/(journal|loi|toc)/([a-z]+[0-9]?)(/current)?$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Misc);
                    r.title_id = m.cap(2);
                    r.unitid = m
                        .group(2)
                        .map(|code| format!("{code}{}", m.group(3).unwrap_or_default()));
                },
            ),
            // /toc/achre4/46/4
            Rule::path(
                "issue-toc",
                r"/toc/([a-z]+[0-9]?)/([0-9]+)/([0-9]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Misc);
                    r.title_id = m.cap(1);
                    r.vol = m.cap(2);
                    r.issue = m.cap(3);
                    if let (Some(journal), Some(vol), Some(issue)) =
                        (m.group(1), m.group(2), m.group(3))
                    {
                        r.unitid = Some(format!("{journal}/{vol}/{issue}"));
                    }
                },
            ),
            // /doi/abs/10.1146/annurev-neuro-062111-150343
            // /doi/pdf/10.1146/annurev.anchem.1.031207.113026
            Rule::path(
                "doi-view",
                r"^/doi/(abs|pdf|full|citedby|suppl)/([0-9]{2}\.[0-9]{4}/(annurev[.-]([a-z]+)[.0-9a-z-]+))$",
                |m, r| {
                    r.doi = m.cap(2);
                    r.unitid = m.cap(3);
                    r.title_id = m.cap(4);
                    match m.group(1) {
                        Some("abs") => r.set_kind(ResourceType::Abs, MimeType::Html),
                        Some("pdf") => r.set_kind(ResourceType::Article, MimeType::Pdf),
                        Some("full") => r.set_kind(ResourceType::Article, MimeType::Html),
                        Some("citedby") => r.set_kind(ResourceType::Ref, MimeType::Html),
                        Some("suppl") => r.set_kind(ResourceType::Suppl, MimeType::Misc),
                        _ => {}
                    }
                },
            ),
            // /doi/10.1146/annurev-anthro-102116-041244
            Rule::path(
                "doi",
                r"(?i)^/doi/([0-9]{2}\.[0-9]{4}/(annurev[.-]([a-z]+)[.0-9a-z-]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.doi = m.cap(1);
                    r.unitid = m.cap(2);
                    r.title_id = m.cap(3);
                },
            ),
            Rule::path(
                "show-publications",
                r"(?i)^/action/showPublications$",
                |_, r| r.set_kind(ResourceType::Toc, MimeType::Html),
            ),
            // /action/doSearch?AllField=alcohol
            Rule::path("search", r"(?i)^/action/doSearch$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /na101/home/literatum/publisher/ar/journals/content/clinpsy/2013/clinpsy.2013.9.issue-1/annurev-clinpsy-050212-185610/20130321/images/large/cp90703.f1.jpeg
            Rule::path(
                "figure-image",
                r"(?i)^/na101/home/literatum/publisher/ar/journals/content/(.*?)/([0-9]+)/(.*?)/.*\.(?:jpeg|jpg|ppt)$",
                |m, r| {
                    r.set_kind(ResourceType::Image, MimeType::Misc);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(3);
                },
            ),
        ],
    )
});

/// Annual Reviews journals.
#[derive(Debug, Default)]
pub struct AnnualReviewsPlatform;

impl AnnualReviewsPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for AnnualReviewsPlatform {
    fn id(&self) -> &'static str {
        "ar"
    }

    fn name(&self) -> &'static str {
        "Annual Reviews"
    }

    fn hosts(&self) -> &'static [&'static str] {
        AR_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
