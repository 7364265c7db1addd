//! Transplantation Proceedings (`transplantation-proceedings.org`). Every access
//! to the journal's own host is counted as a reference page.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static TP_HOSTS: &[&str] = &["transplantation-proceedings.org"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "tp",
        vec![Rule::hostname(
            "journal-site",
            r"(?i)www\.transplantation-proceedings\.org",
            |_, r| r.set_kind(ResourceType::Ref, MimeType::Html),
        )],
    )
});

#[derive(Debug, Default)]
pub struct TransplantationProceedingsPlatform;

impl TransplantationProceedingsPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for TransplantationProceedingsPlatform {
    fn id(&self) -> &'static str {
        "tp"
    }

    fn name(&self) -> &'static str {
        "Transplantation Proceedings"
    }

    fn hosts(&self) -> &'static [&'static str] {
        TP_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::rules::classify_url;

    #[test]
    fn test_tp_any_path_on_journal_host() {
        for url in [
            "http://www.transplantation-proceedings.org/",
            "http://www.transplantation-proceedings.org/article/S0041-1345(18)30001-2/fulltext",
        ] {
            let record = classify_url(&RULES, url);
            assert_eq!(record.rtype, Some(ResourceType::Ref), "{url}");
            assert_eq!(record.mime, Some(MimeType::Html), "{url}");
        }
    }

    #[test]
    fn test_tp_other_host_is_empty() {
        assert!(classify_url(&RULES, "http://www.example.org/").is_empty());
    }
}
