//! PressReader newspaper kiosk (`pressreader.com`). Only the cookie handshake is
//! recognised; reading happens inside a client application.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static PR_HOSTS: &[&str] = &["pressreader.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "pr",
        vec![
            // /Authentication/ConfirmCookies?_=1528393102616
            Rule::path(
                "confirm-cookies",
                r"(?i)^/Authentication/ConfirmCookies$",
                |_, r| r.set_kind(ResourceType::Connection, MimeType::Html),
            ),
        ],
    )
});

#[derive(Debug, Default)]
pub struct PressReaderPlatform;

impl PressReaderPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for PressReaderPlatform {
    fn id(&self) -> &'static str {
        "pr"
    }

    fn name(&self) -> &'static str {
        "PressReader"
    }

    fn hosts(&self) -> &'static [&'static str] {
        PR_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
