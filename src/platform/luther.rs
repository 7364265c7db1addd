//! Luthers Werke im WWW (`luther.chadwyck.com`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static LUTHER_HOSTS: &[&str] = &["luther.chadwyck.com", "luther.chadwyck.co.uk"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "luther",
        vec![
            Rule::path("search", r"(?i)^/(english|deutsch)/frames/werke/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /english/frames/werke/htxview?template=toc_hdft.htx&content=toc_top.htx
            Rule::path("htx-view", r"(?i)^/(english|deutsch)/frames/werke/htxview$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
            // /english/frames/werke/toc?action=byid&id=L0000085&CONTROL=ON
            Rule::path("toc", r"(?i)^/(english|deutsch)/frames/werke/toc$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.param("id");
                r.unitid = m.param("id");
            }),
            // /english/frames/werke/fulltext?ALL=Y&action=byid&id=Z000018206
            Rule::path("fulltext", r"(?i)^/(english|deutsch)/frames/werke/fulltext$", |m, r| {
                r.set_kind(ResourceType::Book, MimeType::Html);
                r.title_id = m.param("id");
                r.unitid = m.param("id");
            }),
        ],
    )
});

/// Luthers Werke, the Weimar edition of Luther's works.
#[derive(Debug, Default)]
pub struct LutherPlatform;

impl LutherPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for LutherPlatform {
    fn id(&self) -> &'static str {
        "luther"
    }

    fn name(&self) -> &'static str {
        "Luthers Werke"
    }

    fn hosts(&self) -> &'static [&'static str] {
        LUTHER_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
