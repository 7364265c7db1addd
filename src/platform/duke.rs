//! Duke University Press (`read.dukeupress.edu`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static DUKE_HOSTS: &[&str] = &["read.dukeupress.edu"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "dukeupress",
        vec![
            // /search-results?page=1&q=aristotle
            Rule::path("search", r"(?i)^/search-results$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            Rule::path("book-search", r"(?i)^/books/search-results$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /books/pages/Browse_by_Subject
            Rule::path("book-browse", r"(?i)^/books/pages/Browse_by_([a-zA-Z]+)$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /journals/pages/Browse_by_Title
            Rule::path("journal-browse", r"(?i)^/journals/pages/Browse_by_([a-zA-Z]+)$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /books/book/2045/Natural-and-Moral-History-of-the-Indies
            Rule::path("book", r"(?i)^/books/book/([0-9]+)/([a-zA-Z0-9-]+)$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.title_id = m
                    .group(1)
                    .zip(m.group(2))
                    .map(|(id, slug)| format!("{id}/{slug}"));
                r.unitid = m.cap(2);
            }),
            // /tikkun/article/30383/
            Rule::path("article", r"(?i)^/([a-z]+)/article/([0-9]+)/$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.title_id = m.cap(2);
                r.unitid = m.cap(2);
            }),
            // /hope/article-abstract/18/3/523/11287/Aristotle-as-a-Welfare-Economist-A-Comment-with-a
            Rule::path(
                "article-abstract",
                r"(?i)^/([a-z]+)/article-abstract/([0-9]+)/([0-9]+)/([0-9]+)/([0-9]+)/([a-zA-Z0-9-]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Html);
                    let parts: Option<Vec<&str>> = (2..=5).map(|i| m.group(i)).collect();
                    r.title_id = parts.map(|parts| parts.join("/"));
                    r.unitid = m.cap(6);
                },
            ),
            // /hope/article-pdf/423764/ddhope_17_3_391.pdf
            Rule::path(
                "article-pdf",
                r"(?i)^/([a-z]+)/article-pdf/([0-9]+)/([a-zA-Z0-9_-]+)\.pdf$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.title_id = m.cap(2);
                    r.unitid = m.cap(3);
                },
            ),
            // /books/chapter-pdf/494704/9780822383932-011.pdf
            Rule::path(
                "chapter-pdf",
                r"(?i)^/([a-z]+)/chapter-pdf/([0-9]+)/([a-zA-Z0-9_-]+)\.pdf$",
                |m, r| {
                    r.set_kind(ResourceType::BookPart, MimeType::Pdf);
                    r.title_id = m.cap(2);
                    r.unitid = m.cap(3);
                },
            ),
        ],
    )
});

/// Duke University Press journals and books.
#[derive(Debug, Default)]
pub struct DukePressPlatform;

impl DukePressPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for DukePressPlatform {
    fn id(&self) -> &'static str {
        "dukeupress"
    }

    fn name(&self) -> &'static str {
        "Duke University Press"
    }

    fn hosts(&self) -> &'static [&'static str] {
        DUKE_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
