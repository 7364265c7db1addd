//! Economist Intelligence Unit (`*.eiu.com`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static EIU_HOSTS: &[&str] = &["eiu.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "eiu",
        vec![
            // /default.aspx?sText=potato
            Rule::path("search", r"(?i)^/default\.aspx$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /industry/article/2000497984/usa-food-us-potato-giant-bets-on-biotech-potatoes/2013-05-15
            Rule::path(
                "industry-article",
                r"(?i)^/industry/article/([0-9]+)/([A-Za-z0-9_-]+)/([0-9-]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(1);
                },
            ),
            // /index.asp?layout=VWArticleVW3&article_id=725731056
            Rule::path("viewswire-article", r"(?i)^/index\.asp$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.title_id = m.param("article_id");
                r.unitid = m.param("article_id");
            }),
            // /article.aspx?articleid=1987582182
            Rule::path("country-article", r"(?i)^/article\.aspx$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.title_id = m.param("articleid");
                r.unitid = m.param("articleid");
            }),
            // /handlers/filehandler.ashx?issue_id=777081261&mode=pdf
            Rule::path("issue-file", r"(?i)^/handlers/filehandler\.ashx$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.title_id = m.param("issue_id");
                r.unitid = m.param("issue_id");
            }),
            // /Handlers/WhitepaperHandler.ashx?fi=Democracy_Index_2018.pdf&mode=wp
            Rule::path("whitepaper", r"(?i)^/Handlers/WhitepaperHandler\.ashx$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.title_id = m.param("fi");
                r.unitid = m.param("fi");
            }),
            // /EIUTableView.aspx?initial=true&pubtype_id=1353181320
            Rule::path("table", r"(?i)^/EIUTableView\.aspx$", |m, r| {
                r.set_kind(ResourceType::Data, MimeType::Html);
                r.title_id = m.param("pubtype_id");
                r.unitid = m.param("pubtype_id");
            }),
        ],
    )
});

/// Economist Intelligence Unit country, industry and data services.
#[derive(Debug, Default)]
pub struct EiuPlatform;

impl EiuPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for EiuPlatform {
    fn id(&self) -> &'static str {
        "eiu"
    }

    fn name(&self) -> &'static str {
        "Economist Intelligence Unit"
    }

    fn hosts(&self) -> &'static [&'static str] {
        EIU_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
