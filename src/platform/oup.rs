//! Oxford University Press: Oxford Journals (`*.oxfordjournals.org`), the Oxford
//! online reference products and the Oxford English Dictionary (`oed.com`).
//!
//! Journal hosts are named after the journal (`petrology.oxfordjournals.org`),
//! which gives the title id. On the reference products the product is only known
//! from the host, so most rules there add it as `publication_title`.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use super::utils::{LookupTable, lookup_title_by_host, with_doi_prefix};
use crate::record::{MimeType, ResourceType, ResultRecord};

/// DOI prefix registered to Oxford University Press.
pub const OUP_DOI_PREFIX: &str = "10.1093/";

static OUP_HOSTS: &[&str] = &[
    "oxfordjournals.org",
    "oxfordclinicalpsych.com",
    "oxfordmusiconline.com",
    "oxfordbibliographies.com",
    "oxfordreference.com",
    "oxfordbiblicalstudies.com",
    "oxfordwesternmusic.com",
    "oed.com",
];

/// Online products, keyed by a fragment of their host.
const OUP_PRODUCTS: LookupTable = &[
    ("oxfordclinicalpsych.com", "Oxford Clinical Psychology"),
    ("oxfordmusiconline.com", "Oxford Music Online"),
    ("oxfordbibliographies.com", "Oxford Bibliographies"),
    ("oxfordreference.com", "Oxford Reference"),
    ("oxfordbiblicalstudies.com", "Oxford Biblical Studies Online"),
    ("oxfordwesternmusic.com", "Oxford History of Western Music"),
    ("oed.com", "Oxford English Dictionary"),
];

fn journal_code(m: &Match<'_>) -> Option<String> {
    m.hostname().split('.').next().map(str::to_string)
}

/// Journal article under `/content/<...>/<journal>.<id>`: the last segment with
/// its first `.` turned into `/` is the DOI suffix. The second segment is the
/// year for `early/<year>/...` paths.
fn journal_article(m: &Match<'_>, rtype: ResourceType, mime: MimeType, r: &mut ResultRecord) {
    r.title_id = journal_code(m);
    r.set_kind(rtype, mime);
    if let Some(content) = m.group(1) {
        let last = content.rsplit('/').next().unwrap_or(content);
        let doi = with_doi_prefix(OUP_DOI_PREFIX, &last.replacen('.', "/", 1));
        r.unitid = Some(doi.clone());
        r.doi = Some(doi);
        r.publication_date = content.split('/').nth(1).map(str::to_string);
    }
}

/// A page of one of the reference products.
fn product_page(m: &Match<'_>, rtype: ResourceType, mime: MimeType, r: &mut ResultRecord) {
    r.set_kind(rtype, mime);
    r.publication_title = lookup_title_by_host(OUP_PRODUCTS, m.hostname());
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "oup",
        vec![
            Rule::path("current-issue", r"^/content/current$", |m, r| {
                r.title_id = journal_code(m);
                r.set_kind(ResourceType::Toc, MimeType::Misc);
                r.unitid = Some("current".to_string());
            }),
            // /content/early/2014/01/11/petrology.egt077.short
            Rule::path("abstract", r"^/content/(.*)\.short$", |m, r| {
                journal_article(m, ResourceType::Abs, MimeType::Html, r);
            }),
            // /content/early/2014/01/11/petrology.egt077.full
            Rule::path("fulltext", r"^/content/(.*)\.full$", |m, r| {
                journal_article(m, ResourceType::Article, MimeType::Html, r);
            }),
            // /content/early/2014/01/11/petrology.egt077.full.pdf+html
            Rule::path("fulltext-pdf", r"^/content/(.*)\.full\.pdf(?:\+html)?$", |m, r| {
                journal_article(m, ResourceType::Article, MimeType::Pdf, r);
            }),
            // /content/55/2/241/suppl/DC1
            Rule::path("supplement", r"^/content/(.*)/suppl/(.*)$", |m, r| {
                r.title_id = journal_code(m);
                r.set_kind(ResourceType::Suppl, MimeType::Misc);
                r.unitid = m.cap(2);
            }),
            // /content/113/3/403.figures-only
            Rule::path("figures", r"\.figures-only$", |m, r| {
                r.title_id = journal_code(m);
                r.set_kind(ResourceType::Figures, MimeType::Misc);
                let segments: Vec<&str> = m.pathname().split('/').collect();
                if let Some(parts) = segments.get(2..5) {
                    r.unitid = Some(parts.join("/"));
                }
            }),
            // /fileasset/OxfordPsychologyOnlineLIVETitleList_Jan_2018.xlsx
            Rule::path("file-asset", r"(?i)^/fileasset/", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Misc, r);
            }),
            // /search?q=freud, /browse?t0=OXPSYCH_SPECIALTY:SCI02210
            Rule::path("search", r"(?i)^/(?:search|browse)$", |m, r| {
                product_page(m, ResourceType::Search, MimeType::Html, r);
            }),
            // /view/10.1093/med:psych/9780190271350.001.0001/med-9780190271350-chapter-10
            Rule::path("book", r"(?i)/view/(([0-9.]*)/(.*?)/(.*?))/(.*)", |m, r| {
                let pdf = m.pathname().to_ascii_lowercase().ends_with(".pdf")
                    || m.query("print") == Some("pdf");
                let mime = if pdf { MimeType::Pdf } else { MimeType::Html };
                r.set_kind(ResourceType::Book, mime);
                r.doi = m.cap(1);
                r.unitid = m.cap(5);
            }),
            // /oso/search.downloaddocsetaspdf:download/OXPSYCH_SERIES:best_practices
            Rule::path("docset-pdf", r"(?i)downloaddocsetaspdf:download/(.*)", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Pdf, r);
                r.unitid = m.cap(1);
            }),
            // /page/307/%20Treatments%20That%20Work
            Rule::path("nested-page", r"(?i)^/page/.*/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /view/document/obo-9780195393361/obo-9780195393361-0110.xml
            Rule::path("bibliography", r"(?i)/view/document/(.*)/(.*)\.xml$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.doi = m
                    .group(1)
                    .map(|work| with_doi_prefix(OUP_DOI_PREFIX, &work.replacen('-', "/", 1)));
                r.unitid = m.cap(2);
            }),
            // /obo/page/biblical-studies
            Rule::path("product-page", r"(?i)^/[a-z]{3}/page/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /obo/exportcitations:export/$002fdocument$002fobo-9780199874002...
            Rule::path("export-citations", r"(?i)^/[a-z]{3}/exportcitations", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
            }),
            // /newsitem/176/December$00202017$002fJanuary$00202018$0020Update$0020Live
            Rule::path("news", r"(?i)^/(?:newsitem|news)/", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
            }),
            // /page/2008-letter-from-the-editor
            Rule::path("page", r"(?i)^/page/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /article/book/obso-9780191001581/obso-9780191001581-div1-22/images/obso-9780191001581-figureGroup-33
            Rule::path("image", r"(?i)/images/((.*?)-(.*?)-(.*))$", |m, r| {
                product_page(m, ResourceType::Image, MimeType::Misc, r);
                r.print_identifier = m.cap(3);
                r.unitid = m.cap(1);
            }),
            // /article/book/obso-9780192835253/obso-9780192835253-div1-729
            Rule::path("book-section", r"(?i)^/article/book/[a-z]*-([0-9]*)/", |m, r| {
                product_page(m, ResourceType::BookSection, MimeType::Html, r);
                r.print_identifier = m.cap(1);
            }),
            // /article/bibref/Tanakh/Mic/1
            Rule::path("bible-reference", r"(?i)^/article/bibref/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /article/full/bibref/NRSV/Num/13
            Rule::path("bible-reference-full", r"(?i)^/article/full/bibref/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /article/concord-dual/opr/t259/e4/bibref/NRSV/Rev/2?verse=4
            Rule::path(
                "concordance-reference",
                r"(?i)^/article/[a-z]*-[a-z]*/opr/[a-z0-9]*/[a-z0-9]*/bibref/(.*)$",
                |m, r| {
                    product_page(m, ResourceType::Ref, MimeType::Html, r);
                    r.unitid = m.cap(1);
                },
            ),
            // /article/opr/t120/e0638
            Rule::path("reference-entry", r"(?i)^/article/opr/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /article/sidebyside/bibref/KJV/bibref/Tanakh/Isa/40?verse=
            Rule::path("side-by-side", r"(?i)^/article/sidebyside/bibref/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /concordancebrowse?work=/opr/t259/
            Rule::path("concordance", r"(?i)^/concordancebrowse$", |m, r| {
                product_page(m, ResourceType::Search, MimeType::Html, r);
            }),
            // /AdvancedSearch.html
            Rule::path("search-page", r"(?i)search", |m, r| {
                product_page(m, ResourceType::Search, MimeType::Html, r);
            }),
            // /Timeline.html?_hi=22&_start=31
            Rule::path("timeline", r"(?i)^/Timeline", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
            }),
            // /view/Volume5/actrade-9780195384857-div1-007002.xml
            Rule::path(
                "western-music",
                r"(?i)^/view/[0-9a-zA-Z]*/([a-z]*-([0-9]*)-(.*))\.xml$",
                |m, r| {
                    product_page(m, ResourceType::Article, MimeType::Html, r);
                    r.unitid = m.cap(1);
                    r.print_identifier = m.cap(2);
                },
            ),
            Rule::path("appeals", r"(?i)^/appeals$", |m, r| {
                product_page(m, ResourceType::Toc, MimeType::Html, r);
            }),
            // /appeals/arnold-palmer/
            Rule::path("appeal", r"(?i)^/appeals/(.*)/$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            Rule::path("appeals-news", r"(?i)^/appeals-(?:news|tags)", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
            }),
            Rule::path("aspects-of-english", r"(?i)^/aspects-of-english/$", |m, r| {
                product_page(m, ResourceType::Toc, MimeType::Html, r);
            }),
            // /aspects-of-english/english-in-use/south-african-english/
            Rule::path("aspects-of-english-page", r"(?i)^/aspects-of-english/(.*)$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            Rule::path("thesaurus", r"(?i)^/historical-thesaurus-of-the-oed/$", |m, r| {
                product_page(m, ResourceType::Toc, MimeType::Html, r);
            }),
            // /historical-thesaurus-of-the-oed/how-to-use-the-historical-thesaurus-of-the-oed/
            Rule::path("thesaurus-page", r"(?i)^/historical-thesaurus-of-the-oed/(.*)/$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            Rule::path("oed-history", r"(?i)^/history-of-the-oed/$", |m, r| {
                product_page(m, ResourceType::Ref, MimeType::Html, r);
            }),
            // /view/Entry/135565
            Rule::path("dictionary-entry", r"(?i)^/view/(?:Entry|source)/(.*)$", |m, r| {
                product_page(m, ResourceType::Article, MimeType::Html, r);
                r.unitid = m.cap(1);
            }),
            // /audio?file=%2Fsoundfiles%2Fa%2Fat%2Fato%2Fatol
            Rule::path("audio", r"(?i)^/audio$", |m, r| {
                product_page(m, ResourceType::Audio, MimeType::Misc, r);
                r.unitid = m.param("file");
            }),
            // /browsedictionary?scope=SENSE&subjectClass=Agriculture+and+Horticulture
            Rule::path("browse-dictionary", r"(?i)^/browsedictionary$", |m, r| {
                product_page(m, ResourceType::Search, MimeType::Html, r);
            }),
        ],
    )
});

/// Oxford Journals, the Oxford reference products and the OED.
#[derive(Debug, Default)]
pub struct OupPlatform;

impl OupPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for OupPlatform {
    fn id(&self) -> &'static str {
        "oup"
    }

    fn name(&self) -> &'static str {
        "Oxford University Press"
    }

    fn hosts(&self) -> &'static [&'static str] {
        OUP_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
