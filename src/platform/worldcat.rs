//! WorldCat Discovery library catalogues (`*.on.worldcat.org`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static WORLDCAT_HOSTS: &[&str] = &["worldcat.org"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "worldcat",
        vec![
            // /search?databaseList=283&queryString=se:The%20Oxford%20Mark%20Twain
            Rule::path("search", r"(?i)^/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /ajax/public/holdings/1782154/1?address=&scope=
            Rule::path("holdings", r"(?i)^/ajax/public/holdings/([0-9]+)/1$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
        ],
    )
});

#[derive(Debug, Default)]
pub struct WorldcatPlatform;

impl WorldcatPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for WorldcatPlatform {
    fn id(&self) -> &'static str {
        "worldcat"
    }

    fn name(&self) -> &'static str {
        "Worldcat"
    }

    fn hosts(&self) -> &'static [&'static str] {
        WORLDCAT_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
