//! American Physiological Society journals (`physiology.org`).
//!
//! Article pages carry the full DOI in the path. It doubles as the title id and
//! unit id since the journal code is not separated from it.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use crate::record::{MimeType, ResourceType, ResultRecord};

static PHYSIOLOGY_HOSTS: &[&str] = &["physiology.org"];

fn doi_view(m: &Match<'_>, rtype: ResourceType, mime: MimeType, r: &mut ResultRecord) {
    r.set_kind(rtype, mime);
    r.title_id = m.cap(1);
    r.unitid = m.cap(1);
    r.doi = m.cap(1);
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "physiology",
        vec![
            // /action/doSearch?AllField=rainbow, /author/Burton%2C+R+R, /keyword/Emphysema
            Rule::path("search", r"(?i)^/action/doSearch|author|keyword", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /journal/ajpheart, /topic/advances-collections/2018-institute-for-teaching-and-learning
            Rule::path("journal", r"(?i)^/(?:journal|topic)/([a-z0-9/-]+)$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /toc/ajprenal/316/5, /toc/ajprenal/current
            Rule::path("toc", r"(?i)^/toc/([a-z-]+)/([a-z0-9/-]+)", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(2);
            }),
            // /ajprenal/about
            Rule::path("about", r"(?i)^/([a-z0-9-]+)/about$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /doi/abs/10.1152/jappl.1967.22.4.782
            Rule::path("abstract", r"(?i)^/doi/abs/([0-9a-z./-]+)$", |m, r| {
                doi_view(m, ResourceType::Abs, MimeType::Html, r);
            }),
            // /doi/full/10.1152/ajpheart.00004.2019
            Rule::path("fulltext", r"(?i)^/doi/full/([0-9a-z./-]+)$", |m, r| {
                doi_view(m, ResourceType::Article, MimeType::Html, r);
            }),
            // /doi/pdf/10.1152/physiol.00007.2019
            Rule::path("pdf", r"(?i)^/doi/pdf/([0-9a-z./-]+)$", |m, r| {
                doi_view(m, ResourceType::Article, MimeType::Pdf, r);
            }),
        ],
    )
});

/// APS journals.
#[derive(Debug, Default)]
pub struct PhysiologyPlatform;

impl PhysiologyPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for PhysiologyPlatform {
    fn id(&self) -> &'static str {
        "physiology"
    }

    fn name(&self) -> &'static str {
        "American Physiological Society"
    }

    fn hosts(&self) -> &'static [&'static str] {
        PHYSIOLOGY_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
