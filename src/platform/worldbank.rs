//! World Bank eLibrary (`elibrary.worldbank.org`).
//!
//! Books and articles share the same `/doi/pdf/` route, so PDF downloads are all
//! counted as articles.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use crate::record::{MimeType, ResourceType, ResultRecord};

static WORLDBANK_HOSTS: &[&str] = &["elibrary.worldbank.org"];

fn listing(m: &Match<'_>, r: &mut ResultRecord) {
    r.set_kind(ResourceType::Toc, MimeType::Html);
    r.title_id = m.cap(1);
    r.unitid = m.cap(1);
}

fn doi_page(m: &Match<'_>, r: &mut ResultRecord) {
    r.title_id = m.cap(1);
    r.unitid = m.cap(1);
    r.doi = m.cap(1);
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "worldbank",
        vec![
            // /action/doSearch?AllField=bananas, /action/showPublications?SeriesKey=kp03,
            // /topic/t021, /page/wb-other-research
            Rule::path(
                "search",
                r"(?i)^/(?:action/doSearch|action/showPublications|topic/[a-zA-Z0-9]+|page/[a-zA-Z-]+)$",
                |_, r| r.set_kind(ResourceType::Search, MimeType::Html),
            ),
            // /loi/deor
            Rule::path("loi", r"(?i)^/loi/(.*)", listing),
            // /toc/wber/24/3, /toc/deor/current
            Rule::path("toc", r"^/toc/(.*)", listing),
            // /action/showDataView?indicator=SH.DYN.MORT&download=csv
            Rule::path("data-view", r"(?i)^/action/showDataView$", |m, r| {
                let mime = if m.query("download") == Some("csv") {
                    MimeType::Csv
                } else {
                    MimeType::Html
                };
                r.set_kind(ResourceType::Data, mime);
                let subject = m
                    .param("region")
                    .filter(|region| !region.is_empty())
                    .or_else(|| m.param("indicator"));
                r.title_id.clone_from(&subject);
                r.unitid = subject;
            }),
            // /doi/book/10.1596/978-1-4648-1281-1?chapterTab=true
            Rule::path("book", r"(?i)^/doi/book/(.*)", |m, r| {
                let rtype = if m.query("chapterTab") == Some("true") {
                    ResourceType::Toc
                } else {
                    ResourceType::Abs
                };
                r.set_kind(rtype, MimeType::Html);
                doi_page(m, r);
            }),
            // /doi/abs/10.1596/1020-797X_12_2_19
            Rule::path("abstract", r"(?i)^/doi/abs/(.*)", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                doi_page(m, r);
            }),
            // /doi/pdf/10.1596/978-1-4648-1281-1_ch3
            Rule::path("pdf", r"(?i)^/doi/pdf/(.*)", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                doi_page(m, r);
            }),
        ],
    )
});

/// World Bank eLibrary.
#[derive(Debug, Default)]
pub struct WorldBankPlatform;

impl WorldBankPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for WorldBankPlatform {
    fn id(&self) -> &'static str {
        "worldbank"
    }

    fn name(&self) -> &'static str {
        "World Bank"
    }

    fn hosts(&self) -> &'static [&'static str] {
        WORLDBANK_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
