//! Thieme: Thieme Connect e-journals (`thieme-connect.de`, `thieme-connect.com`)
//! and the `MedOne` Education e-book portal (`thieme.com`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static THIEME_HOSTS: &[&str] = &["thieme-connect.de", "thieme-connect.com", "thieme.com"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "thieme",
        vec![
            // /products/ejournals/html/10.1055/s-0033-1357180
            Rule::path(
                "ejournal",
                r"^/products/([a-z]+)/([a-z]+)/([0-9]{2}\.[0-9]+)/(([a-z])-([0-9]+)-([0-9]+))$",
                |m, r| {
                    if m.group(2) == Some("html") {
                        r.set_kind(ResourceType::Article, MimeType::Html);
                    } else {
                        r.set_kind(ResourceType::Toc, MimeType::Misc);
                    }
                    r.unitid = m.cap(4);
                    r.title_id = m.cap(4);
                    if let (Some(prefix), Some(suffix)) = (m.group(3), m.group(4)) {
                        r.doi = Some(format!("{prefix}/{suffix}"));
                    }
                },
            ),
            // /products/ejournals/pdf/10.1055/s-0034-1369742.pdf
            Rule::path(
                "ejournal-pdf",
                r"^/products/([a-z]+)/([a-z]+)/([0-9]{2}\.[0-9]+)/(([a-z])-([0-9]+)-([0-9]+))\.pdf$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.unitid = m.cap(4);
                    r.title_id = m.cap(4);
                    if let (Some(prefix), Some(suffix)) = (m.group(3), m.group(4)) {
                        r.doi = Some(format!("{prefix}/{suffix}"));
                    }
                },
            ),
            // /cp/search;;searchterm=gunshot
            Rule::path("search", r"(?i)^/cp/search", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /ebooks/1210827
            Rule::path("ebook", r"(?i)^/ebooks?/(.*)$", |m, r| {
                r.set_kind(ResourceType::Book, MimeType::Html);
                r.unitid = m.cap(1);
            }),
            // /p/author/profile/0000400241
            Rule::path("author", r"(?i)^/p/author/profile/(.*)$", |m, r| {
                r.set_kind(ResourceType::Bio, MimeType::Html);
                r.unitid = m.cap(1);
            }),
            // /media/2156930/ebook_2156930_SL82197621/im2156903
            Rule::path("media", r"(?i)^/media/[0-9]+/((.*)/(.*))$", |m, r| {
                r.set_kind(ResourceType::Image, MimeType::Html);
                r.title_id = m.cap(2);
                r.unitid = m.cap(1);
            }),
        ],
    )
});

/// Thieme journals and e-books.
#[derive(Debug, Default)]
pub struct ThiemePlatform;

impl ThiemePlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for ThiemePlatform {
    fn id(&self) -> &'static str {
        "thieme"
    }

    fn name(&self) -> &'static str {
        "Thieme"
    }

    fn hosts(&self) -> &'static [&'static str] {
        THIEME_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
