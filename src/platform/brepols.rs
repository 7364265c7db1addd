//! Brepols Online (`brepolsonline.net`) and the Brepolis databases (`*.brepolis.net`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use super::utils::{LookupTable, lookup_title};
use crate::record::{MimeType, ResourceType};

static BREPOLS_HOSTS: &[&str] = &["brepolsonline.net", "brepolis.net"];

/// Journal codes used in `/loi/<code>` listings.
const BREPOLS_JOURNALS: LookupTable = &[
    ("almagest", "Almagest"),
    ("aboll", "Analecta Bollandiana"),
    ("asr", "Annali di Scienze Religiose"),
    ("at", "Antiquité Tardive"),
    ("apocra", "Apocrypha"),
    ("arch", "Archeion"),
    ("arihs", "Archives Internationales d'Histoire des Sciences"),
    ("jal", "Ars Lyrica"),
    ("bpm", "Bulletin de Philosophie Médiévale"),
    ("cde", "Chronique d'Egypte"),
    ("csha", "Cleveland Studies in the History of Art"),
    ("convi", "Convivium"),
    ("emd", "European Medieval Drama"),
    ("eyhp", "European Yearbook of the History of Psychology"),
    ("food", "Food and History"),
    ("frag", "Fragmenta"),
    ("gif", "Giornale Italiano di Filologia"),
    ("ham", "Hortus Artium Medievalium"),
    ("ikon", "IKON"),
    ("ima", "In Monte Artium"),
    ("jhes", "Journal for the History of Environment and Society"),
    ("jiaa", "Journal of Inner Asian Art and Archaeology"),
    ("jml", "The Journal of Medieval Latin"),
    ("jmms", "Journal of Medieval Monastic Studies"),
    ("jaf", "Journal of the Alamire Foundation"),
    ("jaaj", "Judaïsme Ancien - Ancient Judaism"),
    ("jr", "Le Journal de la Renaissance"),
    ("lmfr", "Le Moyen Français"),
    ("llr", "Les Lettres Romanes"),
    ("la", "Liber Annuus"),
    ("mss", "Manuscripta"),
    ("tmj", "The Mediaeval Journal"),
    ("ms", "Mediaeval Studies"),
    ("mmm", "Medieval and Modern Matters"),
    ("mlc", "The Medieval Low Countries"),
    ("jmma", "Metropolitan Museum Journal"),
    ("nml", "New Medieval Literatures"),
    ("nms", "Nottingham Medieval Studies"),
    ("pecia", "Pecia"),
    ("perit", "Peritia"),
    ("pceeb", "Publications du Centre Européen d'Etudes Bourguignonnes"),
    ("quaestio", "Quaestio"),
    ("ra", "Recherches Augustiniennes et Patristiques"),
    ("rb", "Revue Bénédictine"),
    ("rea", "Revue d'Etudes Augustiniennes et Patristiques"),
    ("rhef", "Revue d'Histoire de l'Eglise de France"),
    ("rht", "Revue d'Histoire des Textes"),
    ("rhe", "Revue d'Histoire Ecclésiastique"),
    ("rm", "Revue Mabillon"),
    ("rph", "Romance Philology"),
    ("se", "Sacris Erudiri"),
    ("sec", "Semitica et Classica"),
    ("socc", "Studia Orientalia Christiana"),
    ("troia", "Troianalexandrina"),
    ("viator", "Viator"),
    ("viatml", "Viator (English and Multilingual Edition)"),
    ("vms", "Viking and Medieval Scandinavia"),
    ("yls", "The Yearbook of Langland Studies"),
];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "brepols",
        vec![
            // /bmb/search.cfm?action=search_simple_detail_single
            Rule::path("database-search", r"^/([a-z]+)/search\.cfm$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /emgh/pages/FullText.aspx?ctx=AGAFJG
            Rule::path("database-page", r"^/([a-z]+)/pages/([^.]+)\.aspx$", |m, r| {
                r.rtype = Some(ResourceType::BookSection);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
                match m.group(2) {
                    Some("FullText") => r.mime = Some(MimeType::Html),
                    Some("Exporter") => r.mime = Some(MimeType::Pdf),
                    Some("ArticlePrinter") => r.set_kind(ResourceType::Article, MimeType::Pdf),
                    Some("QuickSearch") => r.set_kind(ResourceType::Article, MimeType::Html),
                    Some("ImageProvider") => r.set_kind(ResourceType::Article, MimeType::Misc),
                    _ => {}
                }
            }),
            Rule::path("search", r"(?i)^/action/doSearch$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /author/Payen%2C+Pascal
            Rule::path("author", r"(?i)^/author/", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /doi/10.1484/J.VIATOR.2.301507
            Rule::path("doi", r"(?i)^/doi/(([0-9.]*)/(.*))$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Html);
                r.doi = m.cap(1);
                r.unitid = m.cap(3);
            }),
            // /doi/abs/10.1484/J.ASH.1.102901
            Rule::path("abs", r"(?i)^/doi/abs/(([0-9.]*)/(.*))$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.doi = m.cap(1);
                r.unitid = m.cap(3);
            }),
            // /doi/book/10.1484/M.AS-EB.5.107423
            Rule::path("book", r"(?i)^/doi/book/(([0-9.]*)/(.*))$", |m, r| {
                r.set_kind(ResourceType::Book, MimeType::Html);
                r.doi = m.cap(1);
                r.unitid = m.cap(3);
            }),
            // /doi/pdf/10.1484/J.ASH.1.102904
            Rule::path("pdf", r"(?i)^/doi/pdf/(([0-9.]*)/(.*))$", |m, r| {
                r.set_kind(ResourceType::Book, MimeType::Pdf);
                r.doi = m.cap(1);
                r.unitid = m.cap(3);
            }),
            // /loi/almagest
            Rule::path("journal-issues", r"(?i)^/loi/([a-z]*)$", |m, r| {
                r.set_kind(ResourceType::Abs, MimeType::Html);
                r.publication_title = m
                    .group(1)
                    .and_then(|code| lookup_title(BREPOLS_JOURNALS, code));
            }),
        ],
    )
});

/// Brepols journals, books and databases.
#[derive(Debug, Default)]
pub struct BrepolsPlatform;

impl BrepolsPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for BrepolsPlatform {
    fn id(&self) -> &'static str {
        "brepols"
    }

    fn name(&self) -> &'static str {
        "Brepols Online"
    }

    fn hosts(&self) -> &'static [&'static str] {
        BREPOLS_HOSTS
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
    fn test_brepols_database_search_is_ref() {
        let record = classify_url(
            &RULES,
            "http://apps.brepolis.net/bmb/search.cfm?action=search_simple_detail_single",
        );
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.title_id.as_deref(), Some("bmb"));
    }

    #[test]
    fn test_brepols_database_page_kinds() {
        let cases = [
            ("FullText", ResourceType::BookSection, MimeType::Html),
            ("Exporter", ResourceType::BookSection, MimeType::Pdf),
            ("ArticlePrinter", ResourceType::Article, MimeType::Pdf),
            ("QuickSearch", ResourceType::Article, MimeType::Html),
            ("ImageProvider", ResourceType::Article, MimeType::Misc),
        ];
        for (page, rtype, mime) in cases {
            let url = format!("http://clt.brepolis.net/dld/pages/{page}.aspx?ctx=1");
            let record = classify_url(&RULES, &url);
            assert_eq!(record.rtype, Some(rtype), "page {page}");
            assert_eq!(record.mime, Some(mime), "page {page}");
            assert_eq!(record.unitid.as_deref(), Some("dld"));
        }
    }

    #[test]
    fn test_brepols_unknown_database_page_has_no_mime() {
        let record = classify_url(&RULES, "http://clt.brepolis.net/dld/pages/Other.aspx");
        assert_eq!(record.rtype, Some(ResourceType::BookSection));
        assert_eq!(record.mime, None);
    }

    #[test]
    fn test_brepols_doi_shapes() {
        let record = classify_url(
            &RULES,
            "http://www.brepolsonline.net/doi/10.1484/J.VIATOR.2.301507",
        );
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.doi.as_deref(), Some("10.1484/J.VIATOR.2.301507"));
        assert_eq!(record.unitid.as_deref(), Some("J.VIATOR.2.301507"));

        let record = classify_url(
            &RULES,
            "http://www.brepolsonline.net/doi/abs/10.1484/J.ASH.1.102901",
        );
        assert_eq!(record.rtype, Some(ResourceType::Abs));

        let record = classify_url(
            &RULES,
            "http://www.brepolsonline.net/doi/pdf/10.1484/J.ASH.1.102904",
        );
        assert_eq!(record.rtype, Some(ResourceType::Book));
        assert_eq!(record.mime, Some(MimeType::Pdf));
    }

    #[test]
    fn test_brepols_loi_looks_up_journal_title() {
        let record = classify_url(&RULES, "http://www.brepolsonline.net/loi/aboll");
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(
            record.publication_title.as_deref(),
            Some("Analecta Bollandiana")
        );
    }

    #[test]
    fn test_brepols_loi_unknown_code_leaves_title_unset() {
        let record = classify_url(&RULES, "http://www.brepolsonline.net/loi/zzz");
        assert_eq!(record.rtype, Some(ResourceType::Abs));
        assert_eq!(record.publication_title, None);
    }

    #[test]
    fn test_brepols_unknown_path_is_empty() {
        assert!(classify_url(&RULES, "http://www.brepolsonline.net/page/about").is_empty());
    }
}
