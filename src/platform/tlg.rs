//! Thesaurus Linguae Graecae and its lexica (`stephanus.tlg.uci.edu`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static TLG_HOSTS: &[&str] = &["tlg.uci.edu"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "tlg",
        vec![
            // /Iris/lsj/WordSearch?word=omega, /Iris/lsj/Search?searchterm=medicine
            Rule::path("search", r"(?i)Search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /Iris/lbg/DictData?eid1=13707&eid2=13715
            Rule::path("dictionary-entry", r"(?i)^/[A-Za-z]+/[a-z]+/DictData$", |_, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
            }),
        ],
    )
});

#[derive(Debug, Default)]
pub struct TlgPlatform;

impl TlgPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for TlgPlatform {
    fn id(&self) -> &'static str {
        "tlg"
    }

    fn name(&self) -> &'static str {
        "Thesaurus Linguae Graecae"
    }

    fn hosts(&self) -> &'static [&'static str] {
        TLG_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
