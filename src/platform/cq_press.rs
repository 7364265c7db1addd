//! CQ Press Library (`library.cqpress.com`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use super::utils::strip_suffix_ignore_case;
use crate::record::{MimeType, ResourceType};

static CQP_HOSTS: &[&str] = &["library.cqpress.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "cqp",
        vec![
            // /cqresearcher/document.php?id=cqr_ht_energy_policy_2017
            // /cqresearcher/document.php?id=cqresrre1995012000.pdf
            Rule::path("document", r"(?i)^/[a-z]*/document\.php$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.unitid = m.param("id");
                let id = m.query("id");
                match id.and_then(|id| strip_suffix_ignore_case(id, ".pdf")) {
                    Some(stem) if !stem.is_empty() => {
                        r.title_id = Some(stem.to_string());
                        r.mime = Some(MimeType::Pdf);
                    }
                    _ => r.title_id = id.map(str::to_string),
                }
            }),
            // /cqalmanac/file.php?path=Floor%20Votes%20Tables/cqal60_1960_House_Floor_Votes_34-37.pdf
            Rule::path("file", r"(?i)^/[a-z]*/file\.php$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Pdf);
                r.title_id = m.param("path");
                r.unitid = m.param("path");
            }),
        ],
    )
});

/// CQ Press Library reference collections.
#[derive(Debug, Default)]
pub struct CqPressPlatform;

impl CqPressPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for CqPressPlatform {
    fn id(&self) -> &'static str {
        "cqp"
    }

    fn name(&self) -> &'static str {
        "CQ Press Library"
    }

    fn hosts(&self) -> &'static [&'static str] {
        CQP_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
