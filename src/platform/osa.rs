//! OpticsInfoBase, the OSA Publishing journals (`osapublishing.org`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static OSA_HOSTS: &[&str] = &["osapublishing.org"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "osa",
        vec![
            // /jot/issue.cfm?volume=83&issue=2
            Rule::path("issue", r"(?i)^/([a-z]+)/issue\.cfm?$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
                r.vol = m.param("volume");
                r.issue = m.param("issue");
            }),
            // /jot/abstract.cfm?uri=jot-83-2-81, with #articleReferences for the references tab
            Rule::path("abstract", r"(?i)^/([a-z]+)/abstract\.cfm$", |m, r| {
                let rtype = if m.has_fragment() {
                    ResourceType::Ref
                } else {
                    ResourceType::Abs
                };
                r.set_kind(rtype, MimeType::Html);
                r.unitid = m.param("uri");
                r.title_id = m.cap(1);
            }),
            // /jot/viewmedia.cfm?uri=jot-83-2-81&seq=0
            Rule::path("media", r"(?i)^/([a-z]+)/viewmedia\.cfm$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.title_id = m.cap(1);
                r.unitid = m.param("uri");
            }),
        ],
    )
});

/// OSA Publishing optics journals.
#[derive(Debug, Default)]
pub struct OsaPlatform;

impl OsaPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for OsaPlatform {
    fn id(&self) -> &'static str {
        "osa"
    }

    fn name(&self) -> &'static str {
        "OpticsInfoBase"
    }

    fn hosts(&self) -> &'static [&'static str] {
        OSA_HOSTS
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
    fn test_osa_issue_volume_and_number() {
        let record = classify_url(
            &RULES,
            "https://www.osapublishing.org/jot/issue.cfm?volume=83&issue=2",
        );
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.title_id.as_deref(), Some("jot"));
        assert_eq!(record.vol.as_deref(), Some("83"));
        assert_eq!(record.issue.as_deref(), Some("2"));
    }

    #[test]
    fn test_osa_abstract_fragment_means_references() {
        let record = classify_url(
            &RULES,
            "https://www.osapublishing.org/jot/abstract.cfm?uri=jot-83-2-81",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.unitid.as_deref(), Some("jot-83-2-81"));

        let record = classify_url(
            &RULES,
            "https://www.osapublishing.org/jot/abstract.cfm?uri=jot-83-2-81#articleReferences",
        );
        assert_eq!(record.rtype, Some(ResourceType::Ref));
    }

    #[test]
    fn test_osa_viewmedia_is_pdf() {
        let record = classify_url(
            &RULES,
            "https://www.osapublishing.org/jot/viewmedia.cfm?uri=jot-83-2-81&seq=0",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.mime, Some(MimeType::Pdf));
    }
}
