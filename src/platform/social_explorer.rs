//! Social Explorer demographic maps (`socialexplorer.com`). Only the proxy
//! entry point is recognised.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static SE_HOSTS: &[&str] = &["socialexplorer.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "se",
        vec![Rule::path("ezproxy", r"(?i)^/ezproxy$", |_, r| {
            r.set_kind(ResourceType::Ref, MimeType::Html);
        })],
    )
});

#[derive(Debug, Default)]
pub struct SocialExplorerPlatform;

impl SocialExplorerPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for SocialExplorerPlatform {
    fn id(&self) -> &'static str {
        "se"
    }

    fn name(&self) -> &'static str {
        "Social Explorer"
    }

    fn hosts(&self) -> &'static [&'static str] {
        SE_HOSTS
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
    fn test_se_ezproxy_entry() {
        let record = classify_url(&RULES, "https://www.socialexplorer.com/ezproxy");
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.mime, Some(MimeType::Html));
        assert!(classify_url(&RULES, "https://www.socialexplorer.com/explore/maps").is_empty());
    }
}
