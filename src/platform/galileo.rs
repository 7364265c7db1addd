//! GALILEO and the Digital Library of Georgia (`*.galileo.usg.edu`, `*.galib.uga.edu`).
//!
//! Collections are free-form directory trees, so most rules key on the file
//! extension and split the path into collection (`title_id`) and file (`unitid`).

use std::sync::LazyLock;

use super::Platform;
use super::rules::{Rule, RuleSet};
use crate::record::{MimeType, ResourceType};

static GALILEO_HOSTS: &[&str] = &["galileo.usg.edu", "galib.uga.edu"];

static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        "galileo",
        vec![
            // /aafa/search?browse-creator=first;sort=creator
            Rule::path("collection-search", r"(?i)^/([A-Za-z0-9_-]+)/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /cgi/bald?query=id:*, /cgi-bin/vsbg.cgi?userid=public
            Rule::path("cgi", r"(?i)^/cgi", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /scholar/emory/databases/
            Rule::path("scholar", r"(?i)^/scholar", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            }),
            // /hargrett/lumpkin/toc.php
            Rule::path("toc", r"(?i)^/([A-Za-z0-9/_-]+)/toc\.php$", |m, r| {
                r.set_kind(ResourceType::Toc, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /statregister/browse/1923_1929.html
            Rule::path(
                "browse",
                r"(?i)^/([A-Za-z0-9_-]+)/browse/([A-Za-z0-9_.-]+)$",
                |m, r| {
                    r.set_kind(ResourceType::Toc, MimeType::Html);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(2);
                },
            ),
            // /savannahmayor/pdf/1894.pdf
            Rule::path("pdf", r"(?i)^/(.*)/([A-Za-z0-9_-]+)\.pdf$", |m, r| {
                r.set_kind(ResourceType::Article, MimeType::Pdf);
                r.title_id = m.cap(1);
                r.unitid = m.cap(2);
            }),
            // /highlander/flv/efhf01/highlander_new.flv
            Rule::path("video", r"(?i)^/([A-Za-z0-9/_-]+)/([A-Za-z0-9_-]+)\.flv$", |m, r| {
                r.set_kind(ResourceType::Video, MimeType::Misc);
                r.title_id = m.cap(1);
                r.unitid = m.cap(2);
            }),
            // /aafa/view?docId=ead/aarl98-008-ead.xml&anchor.id=0
            Rule::path("finding-aid", r"(?i)^/([A-Za-z0-9]+)/view", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.unitid = m.param("docId");
            })
            .when(|m| m.has_param("docId")),
            // /sanborn/CityCounty/Marietta1885/Sheet1.html
            Rule::path(
                "map-sheet",
                r"(?i)^/([A-Za-z0-9/_-]+)/Sheet([0-9_-]+)\.html$",
                |m, r| {
                    r.set_kind(ResourceType::Image, MimeType::Jpeg);
                    r.title_id = m.cap(1);
                    r.unitid = m.group(2).map(|sheet| format!("Sheet{sheet}"));
                },
            ),
            // /hargrett/barnard/
            Rule::path("collection-home", r"(?i)^/([A-Za-z0-9/_-]+)/$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(1);
            }),
            // /sanborn/CityCounty/Region3.html
            Rule::path(
                "collection-html",
                r"(?i)^/([A-Za-z0-9/_-]+)/([A-Za-z0-9_-]+)\.html$",
                |m, r| {
                    r.set_kind(ResourceType::Ref, MimeType::Html);
                    r.title_id = m.cap(1);
                    r.unitid = m.cap(2);
                },
            ),
            // /hargrett/williams/williams2.php
            Rule::path("collection-php", r"(?i)^/([A-Za-z0-9/]+)/([A-Za-z0-9]+)\.php$", |m, r| {
                r.set_kind(ResourceType::Ref, MimeType::Html);
                r.title_id = m.cap(1);
                r.unitid = m.cap(2);
            }),
            // /StyleServer/calcrgn?cat=hagp&style=hagp/hagp.xsl&item=aep001.sid
            Rule::path("image-server", r"(?i)^/([A-Za-z0-9]+)/([A-Za-z0-9]+)", |m, r| {
                r.set_kind(ResourceType::Image, MimeType::Jpeg);
                r.unitid = m.param("item");
            })
            .when(|m| m.has_param("item")),
        ],
    )
});

/// GALILEO virtual library and its digital collections.
#[derive(Debug, Default)]
pub struct GalileoPlatform;

impl GalileoPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Platform for GalileoPlatform {
    fn id(&self) -> &'static str {
        "galileo"
    }

    fn name(&self) -> &'static str {
        "GALILEO"
    }

    fn hosts(&self) -> &'static [&'static str] {
        GALILEO_HOSTS
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
    fn test_galileo_search_entry_points() {
        for url in [
            "http://aafa.galileo.usg.edu/aafa/search?browse-creator=first",
            "http://dlg.galileo.usg.edu/cgi/bald?query=id:*",
            "http://dlg.galileo.usg.edu/cgi-bin/vsbg.cgi?userid=public",
            "http://www.galileo.usg.edu/scholar/emory/databases/",
        ] {
            assert_eq!(
                classify_url(&RULES, url).rtype,
                Some(ResourceType::Search),
                "url {url}"
            );
        }
    }

    #[test]
    fn test_galileo_nested_toc() {
        let record = classify_url(&RULES, "http://dlg.galileo.usg.edu/hargrett/lumpkin/toc.php");
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.unitid.as_deref(), Some("hargrett/lumpkin"));
    }

    #[test]
    fn test_galileo_pdf_splits_directory_and_file() {
        let record = classify_url(&RULES, "http://dlg.galileo.usg.edu/savannahmayor/pdf/1894.pdf");
        assert_eq!(record.rtype, Some(ResourceType::Article));
        assert_eq!(record.title_id.as_deref(), Some("savannahmayor/pdf"));
        assert_eq!(record.unitid.as_deref(), Some("1894"));
    }

    #[test]
    fn test_galileo_video_and_sheet() {
        let record = classify_url(
            &RULES,
            "http://dlg.galileo.usg.edu/highlander/flv/efhf01/highlander_new.flv",
        );
        assert_eq!(record.rtype, Some(ResourceType::Video));
        assert_eq!(record.unitid.as_deref(), Some("highlander_new"));

        let record = classify_url(
            &RULES,
            "http://dlg.galileo.usg.edu/sanborn/CityCounty/Marietta1885/Sheet1.html",
        );
        assert_eq!(record.rtype, Some(ResourceType::Image));
        assert_eq!(record.mime, Some(MimeType::Jpeg));
        assert_eq!(record.unitid.as_deref(), Some("Sheet1"));
    }

    #[test]
    fn test_galileo_view_requires_doc_id() {
        let record = classify_url(
            &RULES,
            "http://aafa.galileo.usg.edu/aafa/view?docId=ead/aarl98-008-ead.xml&anchor.id=0",
        );
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.unitid.as_deref(), Some("ead/aarl98-008-ead.xml"));

        assert!(classify_url(&RULES, "http://aafa.galileo.usg.edu/aafa/view").is_empty());
    }

    #[test]
    fn test_galileo_view_doc_id_presence_decides_match() {
        let record = classify_url(&RULES, "http://aafa.galileo.usg.edu/aafa/view?anchor.id=0");
        assert!(record.is_empty());

        let record = classify_url(&RULES, "http://aafa.galileo.usg.edu/aafa/view?docId=");
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.mime, Some(MimeType::Html));
        assert_eq!(record.unitid.as_deref(), Some(""));
    }

    #[test]
    fn test_galileo_collection_pages() {
        let record = classify_url(&RULES, "http://dlg.galileo.usg.edu/hargrett/barnard/");
        assert_eq!(record.rtype, Some(ResourceType::Ref));
        assert_eq!(record.unitid.as_deref(), Some("hargrett/barnard"));

        let record = classify_url(&RULES, "http://dlg.galileo.usg.edu/hawkins/001.php");
        assert_eq!(record.title_id.as_deref(), Some("hawkins"));
        assert_eq!(record.unitid.as_deref(), Some("001"));
    }

    #[test]
    fn test_galileo_image_server_requires_item() {
        let record = classify_url(
            &RULES,
            "http://dlgcsm.galib.uga.edu/StyleServer/calcrgn?cat=hagp&item=aep001.sid",
        );
        assert_eq!(record.rtype, Some(ResourceType::Image));
        assert_eq!(record.unitid.as_deref(), Some("aep001.sid"));

        assert!(classify_url(&RULES, "http://dlgcsm.galib.uga.edu/StyleServer/calcrgn?cat=hagp").is_empty());
    }
}
