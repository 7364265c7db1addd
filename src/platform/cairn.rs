//! Cairn platform (`cairn.info`, `cairn-int.info`).
//!
//! Article ids look like `ARSS_195_0012` (journal code, issue, first page) while
//! book sections look like `ERES_DUMEZ_2003_01_0009`; the second segment being
//! upper-case letters is what tells the two apart.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use crate::record::{MimeType, ResourceType, ResultRecord};

static CAIRN_HOSTS: &[&str] = &["cairn.info", "cairn-int.info"];

/// Book id: the first four `_`-separated segments of a section id.
fn book_id(article_id: &str) -> String {
    article_id.split('_').take(4).collect::<Vec<_>>().join("_")
}

/// Journal code: the first `_`-separated segment of an article id.
fn journal_code(article_id: &str) -> Option<String> {
    article_id.split('_').next().map(str::to_string)
}

/// True when the second segment of an id carries upper-case letters.
fn is_book_section_id(article_id: &str) -> bool {
    article_id
        .split('_')
        .nth(1)
        .is_some_and(|segment| segment.chars().any(|c| c.is_ascii_uppercase()))
}

/// Trailing page marker of a path: `-page-4` is a full text, `-p-4` a preview and
/// no marker at all a table of contents.
fn apply_page_marker(suffix: Option<&str>, r: &mut ResultRecord) {
    match suffix.and_then(|s| s.split('-').nth(1)).filter(|s| !s.is_empty()) {
        None => r.set_kind(ResourceType::Toc, MimeType::Misc),
        Some("p") => r.set_kind(ResourceType::Preview, MimeType::Misc),
        Some(_) => {}
    }
}

/// `journal-cites` becomes `Cites`; hyphens turn into spaces.
fn journal_title(slug: &str) -> String {
    let mut chars = slug.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    capitalized.replace('-', " ")
}

fn concat(m: &Match<'_>, groups: &[usize]) -> String {
    groups
        .iter()
        .filter_map(|&index| m.group(index))
        .collect()
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "cairn",
        vec![
            // /numero.php?ID_REVUE=ARSS&ID_NUMPUBLIE=ARSS_195&AJOUTBIBLIO=ARSS_195_0012
            Rule::path("issue", r"^/numero\.php$", |m, r| {
                if m.has_param("ID_REVUE") {
                    r.title_id = m.param("ID_REVUE");
                    r.unitid = m.param("AJOUTBIBLIO");
                }
                if m.has_param("AJOUTBIBLIO") {
                    r.set_kind(ResourceType::Bookmark, MimeType::Misc);
                    r.unitid = m.param("AJOUTBIBLIO");
                }
            }),
            // /load_pdf.php?ID_ARTICLE=ARSS_195_0012
            // /load_pdf.php?ID_ARTICLE=ERES_DUMEZ_2003_01_0009
            Rule::path("pdf", r"^/load_pdf\.php$", |m, r| {
                let Some(id) = m.query("ID_ARTICLE") else {
                    return;
                };
                r.unitid = Some(id.to_string());
                if is_book_section_id(id) {
                    r.set_kind(ResourceType::BookSection, MimeType::Pdf);
                    r.title_id = Some(book_id(id));
                } else {
                    r.set_kind(ResourceType::Article, MimeType::Pdf);
                    r.title_id = journal_code(id);
                }
            }),
            // /resume.php?ID_ARTICLE=ARSS_195_0012
            Rule::path("abstract", r"^/resume\.php$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Misc);
                if let Some(id) = m.query("ID_ARTICLE") {
                    r.title_id = journal_code(id);
                    r.unitid = Some(id.to_string());
                }
            }),
            // /feuilleter.php?ID_ARTICLE=PUF_MAZIE_2010_01_0003
            Rule::path("leaf-through", r"^/feuilleter\.php$", |m, r| {
                if let Some(id) = m.query("ID_ARTICLE") {
                    r.set_kind(ResourceType::BookSection, MimeType::Misc);
                    r.unitid = Some(id.to_string());
                    r.title_id = Some(book_id(id));
                }
            }),
            // /revue-actes-de-la-recherche-en-sciences-sociales-2012-5-page-4.htm
            Rule::path(
                "journal-issue-page",
                r"^/(revue-|magazine-|article-)([A-Za-z0-9@-]+)(-[0-9]{4}-[0-9]+([^.]*))\.htm$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.unitid = Some(concat(m, &[1, 2, 3]));
                    r.title_id = Some(concat(m, &[1, 2]));
                    apply_page_marker(m.group(4), r);
                },
            ),
            // /revue-a-contrario.htm
            Rule::path(
                "journal",
                r"^/(revue-|magazine-|article-)([a-z0-9@-]+)\.htm$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Misc);
                    r.unitid = Some(concat(m, &[1, 2]));
                    r.title_id = Some(concat(m, &[1, 2]));
                },
            ),
            // /a-l-ecole-du-sujet--9782749202358-page-9.htm
            Rule::path(
                "book",
                r"^/([a-z0-9@-]+)--([0-9]{13})([^.]*)\.htm$",
                |m, r| {
                    r.set_kind(ResourceType::BookSection, MimeType::Html);
                    if let (Some(slug), Some(isbn)) = (m.group(1), m.group(2)) {
                        r.unitid = Some(format!("{slug}--{isbn}{}", m.group(3).unwrap_or_default()));
                    }
                    r.print_identifier = m.cap(2);
                    apply_page_marker(m.group(3), r);
                },
            ),
            // /article-E_AMX_057_0186--the-economics-and-politics-of-thomas.htm
            Rule::path(
                "international-article",
                r"(?i)^/(revue-|magazine-|article-)(([A-Za-z0-9_-]+)--([a-z-]+))\.htm$",
                |m, r| {
                    r.set_kind(ResourceType::Article, MimeType::Html);
                    r.unitid = m.cap(2);
                    r.title_id = m.cap(4);
                },
            ),
            // /journal-cites.htm
            Rule::path("journal-page", r"(?i)^/journal-(.*)\.htm$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.publication_title = m.group(1).map(journal_title);
            }),
            // /abstract-E_APHI_673_0399--coherence-between-the-first-two.htm
            Rule::path(
                "international-abstract",
                r"(?i)^/abstract-(([A-Za-z0-9_-]+)--([a-z-]+))\.htm$",
                |m, r| {
                    r.set_kind(ResourceType::Abs, MimeType::Html);
                    r.unitid = m.cap(2);
                    r.title_id = m.cap(3);
                },
            ),
            // /article.php?ID_ARTICLE=APHI_673_0399
            Rule::path("article", r"(?i)^/article\.php$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.unitid = m.param("ID_ARTICLE");
                r.title_id = m.param("ID_ARTICLE");
            }),
            Rule::path("books", r"(?i)^/ouvrages\.php$", |_, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
            }),
            // /about_this_journal.php?ID_REVUE=E_AMX
            Rule::path("about-journal", r"(?i)^/about_this_journal\.php$", |_, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
            }),
            // /list_articles_fulltext.php?ID_REVUE=E_MULT
            Rule::path("article-list", r"(?i)^/list_articles_fulltext\.php$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
            // /resultats_recherche.php?searchTerm=plato
            Rule::path("search", r"(?i)^/resultats_recherche\.php$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /abstract.php?ID_ARTICLE=E_VING_092_0067&DocId=24836
            Rule::path("abstract-page", r"(?i)^/abstract\.php$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.unitid = m.param("ID_ARTICLE");
                r.title_id = m.param("DocId");
            }),
            // /article_p.php?ID_ARTICLE=E_NAPO_113_0084
            Rule::path("article-print", r"(?i)^/article_p\.php$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.unitid = m.param("ID_ARTICLE");
                r.title_id = m.param("ID_ARTICLE");
            }),
            // /publications-of-Roux-%20Annie--7797.htm
            Rule::path("author", r"(?i)^/publications-of-.*\.htm$", |_, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
            }),
            Rule::path("journal-list", r"(?i)^/listrev\.php$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
            // /disc-education.htm
            Rule::path("discipline", r"(?i)^/disc-.*\.htm$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
        ],
    )
});

/// Cairn French and international editions.
#[derive(Debug, Default)]
pub struct CairnPlatform;

impl CairnPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for CairnPlatform {
    fn id(&self) -> &'static str {
        "cairn"
    }

    fn name(&self) -> &'static str {
        "Cairn.info"
    }

    fn hosts(&self) -> &'static [&'static str] {
        CAIRN_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
