//! Ingenta Connect (`ingentaconnect.com`, `docserver.ingentaconnect.com`).
//!
//! Volume and issue segments are zero padded to eight digits
//! (`/2010/00000019/00000001`); they are reported without the padding. Issue
//! segments that are not plain numbers (`f0020005`) are kept as they are.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use super::utils::strip_leading_zeros;
use crate::record::{MimeType, ResourceType, ResultRecord};

static IC_HOSTS: &[&str] = &["ingentaconnect.com"];

/// Date, volume and issue of a `/<publisher>/<journal>/<year>/<volume>/<issue>` path.
fn issue_fields(m: &Match<'_>, r: &mut ResultRecord) {
    r.unitid = m.cap(1);
    r.title_id = m.cap(2);
    r.publication_date = m.cap(3);
    r.vol = m.group(4).map(strip_leading_zeros);
    r.issue = m.group(5).map(|issue| {
        if issue.starts_with('0') {
            strip_leading_zeros(issue)
        } else {
            issue.to_string()
        }
    });
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "ic",
        vec![
            // /deliver/connect/iapt/00400262/v66n5/s6.pdf
            Rule::path(
                "deliver",
                r"(?i)^/deliver/connect/(([a-z]+)/([0-9]{4})([0-9]{3}[0-9x])/v([0-9]+)n([0-9]+)/[a-z0-9]+)\.(pdf|html)$",
                |m, r| {
                    r.rtype = Some(ResourceType::Article);
                    r.mime = m.group(7).and_then(MimeType::from_token);
                    r.unitid = m.cap(1);
                    r.title_id = m.cap(2);
                    r.print_identifier = m
                        .group(3)
                        .zip(m.group(4))
                        .map(|(head, tail)| format!("{head}-{tail}"));
                    r.vol = m.cap(5);
                    r.issue = m.cap(6);
                },
            ),
            // /content/tandf/umgd
            Rule::path("journal", r"(?i)^/content/([a-z]+/([a-z]+))$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.unitid = m.cap(1);
                r.title_id = m.cap(2);
            }),
            // /content/schweiz/rs/2010/00000019/00000001
            // /content/imp/jcs/2018/00000025/f0020005
            Rule::path(
                "issue",
                r"(?i)^/content/([a-z]+/([a-z0-9]+)/([0-9]{4})/([0-9]+)/([a-z0-9]+))$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Html);
                    issue_fields(m, r);
                },
            ),
            // /contentone/springer/usw/2017/00000001/00000001/art00005
            // /content/bsc/ans/2017/00000087/00000004/art00003
            Rule::path(
                "article",
                r"(?i)^/(?:contentone|content)/([a-z]+/([a-z0-9]+)/([0-9]{4})/([0-9]+)/([a-z0-9]+)/[a-z0-9_.-]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Html);
                    issue_fields(m, r);
                },
            ),
            Rule::path("contentone", r"(?i)^/contentone", |_, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
            }),
            // /search/article?option1=tka&value1=cancer
            Rule::path("search-article", r"(?i)^/search/article", |_, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
            }),
            // /search;jsessionid=r3lsfa7wb6y3.x-ic-live-01?form_name=quicksearch
            Rule::path(
                "search",
                r"(?i)^/search$|search;jsessionid|content/subject$|content/subcat$|content/bup",
                |_, r| r.set_kind(ResourceType::Search, MimeType::Html),
            ),
            // /content/ssam/15309932
            Rule::path("journal-issn", r"(?i)^/content/([a-z]+/([0-9]{8}))$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.unitid = m.cap(1);
                r.title_id = m.cap(2);
            }),
        ],
    )
});

/// Ingenta Connect journal hosting.
#[derive(Debug, Default)]
pub struct IngentaPlatform;

impl IngentaPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for IngentaPlatform {
    fn id(&self) -> &'static str {
        "ic"
    }

    fn name(&self) -> &'static str {
        "Ingenta Connect"
    }

    fn hosts(&self) -> &'static [&'static str] {
        IC_HOSTS
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
    fn test_ic_deliver_mime_from_extension() {
        let record = classify_url(
            &RULES,
            "http://docserver.ingentaconnect.com/deliver/connect/iapt/00400262/v66n5/s6.pdf",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.mime, Some(MimeType::Pdf));
        assert_eq!(record.unitid.as_deref(), Some("iapt/00400262/v66n5/s6"));
        assert_eq!(record.title_id.as_deref(), Some("iapt"));
        assert_eq!(record.print_identifier.as_deref(), Some("0040-0262"));
        assert_eq!(record.vol.as_deref(), Some("66"));
        assert_eq!(record.issue.as_deref(), Some("5"));

        let record = classify_url(
            &RULES,
            "http://docserver.ingentaconnect.com/deliver/connect/cog/10522166/v14n5/s4.html",
        );
        assert_eq!(record.mime, Some(MimeType::Html));
    }

    #[test]
    fn test_ic_issue_strips_padding() {
        let record = classify_url(
            &RULES,
            "http://www.ingentaconnect.com/content/schweiz/rs/2010/00000019/00000001",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.title_id.as_deref(), Some("rs"));
        assert_eq!(record.publication_date.as_deref(), Some("2010"));
        assert_eq!(record.vol.as_deref(), Some("19"));
        assert_eq!(record.issue.as_deref(), Some("1"));
    }

    #[test]
    fn test_ic_issue_keeps_non_numeric_issue() {
        let record = classify_url(
            &RULES,
            "https://www.ingentaconnect.com/content/imp/jcs/2018/00000025/f0020005",
        );
        assert_eq!(record.vol.as_deref(), Some("25"));
        assert_eq!(record.issue.as_deref(), Some("f0020005"));
    }

    #[test]
    fn test_ic_article_abstract() {
        let record = classify_url(
            &RULES,
            "http://www.ingentaconnect.com/contentone/springer/usw/2017/00000001/00000001/art00005",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(
            record.unitid.as_deref(),
            Some("springer/usw/2017/00000001/00000001/art00005")
        );
        assert_eq!(record.vol.as_deref(), Some("1"));

        let record = classify_url(
            &RULES,
            "https://www.ingentaconnect.com/content/bsc/ans/2017/00000087/00000004/art00003",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.issue.as_deref(), Some("4"));
    }

    #[test]
    fn test_ic_search_shapes() {
        let record = classify_url(
            &RULES,
            "https://www.ingentaconnect.com/search;jsessionid=r3lsfa7wb6y3.x-ic-live-01?option1=tka",
        );
        assert_eq!(record.rtype, Some(ResourceType::Search));

        let record = classify_url(&RULES, "https://www.ingentaconnect.com/search/article?value1=cancer");
        assert_eq!(record.rtype, Some(ResourceType::Abs));
    }

    #[test]
    fn test_ic_journal_by_issn() {
        let record = classify_url(&RULES, "https://www.ingentaconnect.com/content/ssam/15309932");
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.title_id.as_deref(), Some("15309932"));
    }
}
