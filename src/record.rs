//! Normalized classification output and the access-record context handed to rules.
//!
//! A [`ResultRecord`] has one fixed schema shared by every platform. Each field is
//! optional and an absent field means "unknown": serialization omits it instead of
//! writing a placeholder or a `null`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of resource an access refers to (`rtype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// Full text of a periodical article
    Article,
    /// Abstract or landing page
    Abs,
    /// Table of contents or issue/volume listing
    Toc,
    /// Reference or metadata page
    Ref,
    /// Search form or result list
    Search,
    /// Whole book
    Book,
    /// Chapter or section of a book
    BookSection,
    /// Part of a book
    BookPart,
    /// Bookmark or "add to bibliography" action
    Bookmark,
    /// Preview pages of an item
    Preview,
    /// Supplementary material
    Suppl,
    /// Dataset or statistical table
    Data,
    Image,
    Video,
    Audio,
    /// Author biography or profile
    Bio,
    /// Session or authentication handshake
    Connection,
    /// `OpenURL` link-resolver request
    Openurl,
    EncyclopaediaEntry,
    Figures,
}

impl ResourceType {
    /// Returns the stable upper-case label used in output records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "ARTICLE",
            Self::Abs => "ABS",
            Self::Toc => "TOC",
            Self::Ref => "REF",
            Self::Search => "SEARCH",
            Self::Book => "BOOK",
            Self::BookSection => "BOOK_SECTION",
            Self::BookPart => "BOOK_PART",
            Self::Bookmark => "BOOKMARK",
            Self::Preview => "PREVIEW",
            Self::Suppl => "SUPPL",
            Self::Data => "DATA",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::Bio => "BIO",
            Self::Connection => "CONNECTION",
            Self::Openurl => "OPENURL",
            Self::EncyclopaediaEntry => "ENCYCLOPAEDIA_ENTRY",
            Self::Figures => "FIGURES",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of the accessed resource (`mime`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MimeType {
    Html,
    Pdf,
    Xml,
    Misc,
    Jpeg,
    Csv,
    Print,
}

impl MimeType {
    /// Returns the stable upper-case label used in output records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Pdf => "PDF",
            Self::Xml => "XML",
            Self::Misc => "MISC",
            Self::Jpeg => "JPEG",
            Self::Csv => "CSV",
            Self::Print => "PRINT",
        }
    }

    /// Maps a format token captured from a URL (`pdf`, `HTML`, ...) to a mime value.
    ///
    /// Matching is case-insensitive; unknown tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "HTML" | "HTM" => Some(Self::Html),
            "PDF" => Some(Self::Pdf),
            "XML" => Some(Self::Xml),
            "MISC" => Some(Self::Misc),
            "JPEG" | "JPG" => Some(Self::Jpeg),
            "CSV" => Some(Self::Csv),
            "PRINT" => Some(Self::Print),
            _ => None,
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized description of one access, produced fresh by every classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtype: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<MimeType>,
    /// Most specific platform identifier of the accessed item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unitid: Option<String>,
    /// Identifier of the parent container (journal, book, series).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Print ISSN or ISBN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_identifier: Option<String>,
    /// Online ISSN or ISBN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_page: Option<String>,
    /// Publisher item identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pii: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
}

impl ResultRecord {
    /// Creates a record with no field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both `rtype` and `mime`.
    pub fn set_kind(&mut self, rtype: ResourceType, mime: MimeType) {
        self.rtype = Some(rtype);
        self.mime = Some(mime);
    }

    /// Returns true when no field is set, i.e. the URL was not recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Context record of the access being classified.
///
/// Opaque to the engine: rules may read named fields but never modify them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessRecord {
    fields: BTreeMap<String, String>,
}

impl AccessRecord {
    /// Creates an empty access record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `name` set to `value`.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        let record = ResultRecord::new();
        assert!(record.is_empty());
        assert_eq!(serde_json::to_string(&record).unwrap(), "{}");
    }

    #[test]
    fn test_record_serializes_only_set_fields() {
        let mut record = ResultRecord::new();
        record.set_kind(ResourceType::BookSection, MimeType::Pdf);
        record.unitid = Some("c4rp00006d".to_string());

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["rtype"], "BOOK_SECTION");
        assert_eq!(object["mime"], "PDF");
        assert_eq!(object["unitid"], "c4rp00006d");
        assert!(!record.is_empty());
    }

    #[test]
    fn test_resource_type_labels_match_serde_names() {
        for rtype in [
            ResourceType::EncyclopaediaEntry,
            ResourceType::Openurl,
            ResourceType::BookPart,
            ResourceType::Abs,
        ] {
            let json = serde_json::to_value(rtype).unwrap();
            assert_eq!(json, rtype.as_str());
        }
    }

    #[test]
    fn test_mime_from_token_is_case_insensitive() {
        assert_eq!(MimeType::from_token("pdf"), Some(MimeType::Pdf));
        assert_eq!(MimeType::from_token("Html"), Some(MimeType::Html));
        assert_eq!(MimeType::from_token("epub"), None);
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: ResultRecord =
            serde_json::from_str(r#"{"rtype":"TOC","title_id":"rp"}"#).unwrap();
        assert_eq!(record.rtype, Some(ResourceType::Toc));
        assert_eq!(record.title_id.as_deref(), Some("rp"));
        assert_eq!(record.mime, None);
    }

    #[test]
    fn test_access_record_field_access() {
        let access = AccessRecord::new().with_field("login", "jdoe");
        assert_eq!(access.get("login"), Some("jdoe"));
        assert_eq!(access.get("host"), None);
        assert!(AccessRecord::new().is_empty());
    }
}
