//! Chadwyck-Healey literature collections (`*.chadwyck.com`, `*.chadwyck.co.uk`).
//!
//! Every collection shares one URL scheme, so the collection itself is only known
//! from the hostname; it becomes `publication_title` after a rule matched.

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Match, Rule, RuleSet};
use super::utils::{LookupTable, lookup_title_by_host};
use crate::record::{MimeType, ResourceType};

static CHADWYCK_HOSTS: &[&str] = &["chadwyck.com", "chadwyck.co.uk", "journal.csj.jp"];

/// Host fragments naming a collection; the first fragment found in the host wins.
const CHADWYCK_COLLECTIONS: LookupTable = &[
    ("acta.chadwyck.com", "Acta Sanctorum"),
    ("acta.chadwyck.co.uk", "Acta Sanctorum"),
    ("ble.chadwyck.com", "Chadwyck Bibliografia de la Literature Espanola"),
    ("britishperiodicals.chadwyck.co.uk", "Chadwyck ProQuest British Periodicals"),
    ("colonial.chadwyck.com", "Chadwyck Colonial State Papers Collection"),
    ("collections.chadwyck.com", "Chadwyck Literature Collections"),
    ("lion.chadwyck.com", "Chadwyck Literature Online"),
    ("pld.chadwyck.co.uk", "Chadwyck Patrologia Latina"),
    ("www.journal.csj.jp", "Chemistry Letters"),
    ("luther.chadwyck.com", "Luthers Werke"),
    ("luther.chadwyck.co.uk", "Luthers Werke"),
];

/// The record id, spelled `id` or `ID` depending on the collection.
fn record_id(m: &Match<'_>) -> Option<String> {
    m.param("id").or_else(|| m.param("ID"))
}

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "chadwyck",
        vec![
            // /all/fulltext?ALL=Y&action=byid&warn=N&id=Z300036009&div=3
            Rule::path("fulltext", r"(?i)/fulltext$", |m, r| {
                r.set_kind(ResourceType::EncyclopaediaEntry, MimeType::Html);
                r.title_id = record_id(m);
                r.unitid = record_id(m);
            }),
            Rule::path("search", r"(?i)/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /english/frames/werke/htxview?template=toc_hdft.htx
            Rule::path("htx-view", r"(?i)/htxview$", |_, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
            }),
            // /english/frames/werke/toc?action=byid&id=L0000085
            Rule::path("toc", r"(?i)/toc$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = record_id(m);
                r.unitid = record_id(m);
            }),
        ],
    )
    .with_enrichment(|m, r| {
        r.publication_title = lookup_title_by_host(CHADWYCK_COLLECTIONS, m.hostname());
    })
});

/// Chadwyck-Healey collections sharing one URL scheme.
#[derive(Debug, Default)]
pub struct ChadwyckPlatform;

impl ChadwyckPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for ChadwyckPlatform {
    fn id(&self) -> &'static str {
        "chadwyck"
    }

    fn name(&self) -> &'static str {
        "Chadwyck-Healey Literature Collections"
    }

    fn hosts(&self) -> &'static [&'static str] {
        CHADWYCK_HOSTS
    }

    fn rules(&self) -> &RuleSet {
        &RULES
    }
}
