//! CABI platform: `cabi.org` e-books and the `cabdirect.org` abstract database.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static CABI_HOSTS: &[&str] = &["cabi.org", "cabdirect.org"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "cabi",
        vec![
            // /cabebooks/FullTextPDF/2016/20163382836.pdf
            Rule::path(
                "fulltext-pdf",
                r"(?i)^/(cabebooks|cabdirect)/FullTextPDF/([0-9]{4})/(([0-9]+)\.pdf)$",
                |m, r| {
                    r.set_kind(ResourceType::BookSection, MimeType::Pdf);
                    r.unitid = m.cap(4);
                    r.title_id = m.cap(4);
                },
            ),
            // /cabebooks/ebook/20163382850
            Rule::path("ebook", r"(?i)^/cabebooks/ebook/([0-9]+)$", |m, r| {
                r.set_kind(ResourceType::BookSection, MimeType::Html);
                r.unitid = m.cap(1);
                r.title_id = m.cap(1);
            }),
            // /cabdirect/search/?q=rainbow
            Rule::path("search", r"(?i)^/cabdirect/search/$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /cabthesaurus/mtwdk.exe?w=rainbow
            Rule::path("thesaurus", r"(?i)^/cabthesaurus/mtwdk\.exe$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /cabdirect/abstract/20193035305
            Rule::path("abstract", r"(?i)^/cabdirect/abstract/([a-zA-Z0-9]+)$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.unitid = m.cap(1);
                r.title_id = m.cap(1);
            }),
        ],
    )
});

/// CABI e-books and CAB Direct.
#[derive(Debug, Default)]
pub struct CabiPlatform;

impl CabiPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for CabiPlatform {
    fn id(&self) -> &'static str {
        "cabi"
    }

    fn name(&self) -> &'static str {
        "CABI"
    }

    fn hosts(&self) -> &'static [&'static str] {
        CABI_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
