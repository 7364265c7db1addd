//! China National Knowledge Infrastructure (`cnki.net`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static CNKI_HOSTS: &[&str] = &["cnki.net"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "cnki",
        vec![
            // /kcms/detail/search.aspx?dbcode=CJFD&sfield=kw&skey=large+jellyfish
            Rule::path("search", r"(?i)^/kcms/detail/search\.aspx$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /kns55/Navi/CDMDNavi.aspx?XueKe=1&xkCode=020209&xkName=Quantitative+Economics
            Rule::path("subject-navigation", r"(?i)^/kns[0-9]{2}/Navi/CDMDNavi\.aspx$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.param("xkName");
                r.unitid = m.param("xkCode");
            }),
            // /kns55/detail/detail.aspx?DbCode=CJFD&filename=KXYY201708057
            Rule::path("detail", r"(?i)^/kns[0-9]{2}/detail/detail\.aspx$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.title_id = m.param("filename");
                r.unitid = m.param("filename");
            }),
            // /KXReader/Detail?dbcode=CJFD&filename=KXYY201708057
            Rule::path("reader-detail", r"(?i)^/KXReader/Detail$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.title_id = m.param("filename");
                r.unitid = m.param("filename");
            }),
            // /kcms/download.aspx?filename=...&tablename=CDFD1214&cflag=pdf
            Rule::path("download", r"(?i)^/kcms/download\.aspx$", |m, r| {
                r.rtype = Some(ResourceType::Article);
                r.title_id = m.param("filename");
                r.unitid = m.param("filename");
                if m.query("cflag") == Some("pdf") {
                    r.mime = Some(MimeType::Pdf);
                }
            }),
        ],
    )
});

/// CNKI journal and dissertation databases.
#[derive(Debug, Default)]
pub struct CnkiPlatform;

impl CnkiPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for CnkiPlatform {
    fn id(&self) -> &'static str {
        "cnki"
    }

    fn name(&self) -> &'static str {
        "CNKI"
    }

    fn hosts(&self) -> &'static [&'static str] {
        CNKI_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
