//! SWANK Digital Campus film streaming (`swankmp.net`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static SWANK_HOSTS: &[&str] = &["swankmp.net"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "swank",
        vec![
            // /services/s3services/mobile/playinfo?contentId=82531&contentUrl=...
            Rule::path(
                "play-info",
                r"(?i)^/services/s3services/mobile/playinfo$",
                |m, r| {
                    r.set_kind(ResourceType::Video, MimeType::Misc);
                    r.title_id = m.param("contentId");
                    r.unitid = m.param("contentId");
                },
            ),
        ],
    )
});

#[derive(Debug, Default)]
pub struct SwankPlatform;

impl SwankPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for SwankPlatform {
    fn id(&self) -> &'static str {
        "swank"
    }

    fn name(&self) -> &'static str {
        "SWANK"
    }

    fn hosts(&self) -> &'static [&'static str] {
        SWANK_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
