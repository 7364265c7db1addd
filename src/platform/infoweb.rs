//! NewsBank InfoWeb and Readex (`infoweb.newsbank.com`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static INFOWEB_HOSTS: &[&str] = &["infoweb.newsbank.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "infoweb",
        vec![
            // /apps/news/results?p=WORLDNEWS&val-base-0=rainbow
            // /apps/news/hot-topics/science%2C-technology-%26-health?p=Hottopics
            Rule::path(
                "news-search",
                r"(?i)^/apps/news/results$|issue-browse$|hot-topics",
                |_, r| r.set_kind(ResourceType::Search, MimeType::Html),
            ),
            // /iw-search/we/Static/?p_product=Earth&p_action=list
            Rule::path("static-list", r"(?i)^/iw-search/we/Static/$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /apps/news/document-view?p=WORLDNEWS&docref=news/172FFE5E4D54A8A0
            Rule::path("news-document", r"(?i)^/apps/news/document-view$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.unitid = m.param("docref");
                r.title_id = m.param("docref");
            }),
            // /iw-search/we/Static?p_product=Earth&p_action=doc&f_docnum=172F8EE719450268
            Rule::path("static-document", r"(?i)^/iw-search/we/Static$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.unitid = m.param("f_docnum");
                r.title_id = m.param("f_docnum");
            }),
        ],
    )
});

/// NewsBank news archives and Readex special reports.
#[derive(Debug, Default)]
pub struct InfowebPlatform;

impl InfowebPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for InfowebPlatform {
    fn id(&self) -> &'static str {
        "infoweb"
    }

    fn name(&self) -> &'static str {
        "InfoWeb Readex"
    }

    fn hosts(&self) -> &'static [&'static str] {
        INFOWEB_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
