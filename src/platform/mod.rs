//! Per-platform URL classification.
//!
//! Every academic platform has its own URL conventions. Each one is described by
//! a [`RuleSet`]: an ordered list of named rules, evaluated first-match-wins,
//! that turns a [`DecomposedUrl`] into a [`ResultRecord`].
//!
//! # Architecture
//!
//! - [`Platform`] - The uniform contract every platform module implements
//! - [`PlatformRegistry`] - Registration-ordered collection of platforms with host lookup
//! - [`Classifier`] - Dispatch wrapper binding one platform to the `classify` call shape
//! - [`RuleSet`], [`Rule`], [`Match`] - The rule engine shared by all platforms
//! - [`ClassifyError`] - Structural input errors and unknown-platform dispatch
//!
//! # Example
//!
//! ```
//! use access_classifier::parser::DecomposedUrl;
//! use access_classifier::platform::build_default_platform_registry;
//! use access_classifier::record::{AccessRecord, ResourceType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = build_default_platform_registry();
//! let url = DecomposedUrl::parse("https://www.mitpressjournals.org/doi/full/10.1162/DAED_a_00392")?;
//!
//! let record = registry.classifier("mit")?.classify(&url, &AccessRecord::new())?;
//! assert_eq!(record.rtype, Some(ResourceType::Article));
//! assert_eq!(record.doi.as_deref(), Some("10.1162/DAED_a_00392"));
//! # Ok(())
//! # }
//! ```

mod annual_reviews;
mod bioone;
mod brepols;
mod cabi;
mod cairn;
mod cambridge;
mod chadwyck;
mod cnki;
mod cq_press;
mod dispatch;
mod duke;
mod ebscohost;
mod eiu;
mod elgar;
mod error;
mod galileo;
mod infoweb;
mod ingenta;
mod luther;
mod mit;
mod osa;
mod oup;
mod palgrave;
mod physiology;
mod pressreader;
mod registry;
mod rsc;
mod rules;
mod scopus;
mod social_explorer;
mod swank;
mod thieme;
mod tlg;
mod transplantation;
mod utils;
mod worldbank;
mod worldcat;

pub use annual_reviews::AnnualReviewsPlatform;
pub use bioone::BioOnePlatform;
pub use brepols::BrepolsPlatform;
pub use cabi::CabiPlatform;
pub use cairn::CairnPlatform;
pub use cambridge::{CUP_DOI_PREFIX, CambridgePlatform};
pub use chadwyck::ChadwyckPlatform;
pub use cnki::CnkiPlatform;
pub use cq_press::CqPressPlatform;
pub use dispatch::{Classifier, Diagnostics};
pub use duke::DukePressPlatform;
pub use ebscohost::EbscoPlatform;
pub use eiu::EiuPlatform;
pub use elgar::ElgarPlatform;
pub use error::ClassifyError;
pub use galileo::GalileoPlatform;
pub use infoweb::InfowebPlatform;
pub use ingenta::IngentaPlatform;
pub use luther::LutherPlatform;
pub use mit::MitPressPlatform;
pub use osa::OsaPlatform;
pub use oup::{OUP_DOI_PREFIX, OupPlatform};
pub use palgrave::PalgravePlatform;
pub use physiology::PhysiologyPlatform;
pub use pressreader::PressReaderPlatform;
pub use registry::PlatformRegistry;
pub use rsc::RscPlatform;
pub use rules::{Extractor, Guard, Match, Rule, RuleSet, Target};
pub use scopus::ScopusPlatform;
pub use social_explorer::SocialExplorerPlatform;
pub use swank::SwankPlatform;
pub use thieme::ThiemePlatform;
pub use tlg::TlgPlatform;
pub use transplantation::TransplantationProceedingsPlatform;
pub use utils::{
    LookupTable, canonical_host, compile_static_regex, host_within, lookup_title,
    lookup_title_by_host, strip_prefix_ignore_case, strip_suffix_ignore_case, with_doi_prefix,
};
pub use worldbank::WorldBankPlatform;
pub use worldcat::WorldcatPlatform;

use crate::parser::DecomposedUrl;
use crate::record::{AccessRecord, ResultRecord};

/// Builds the registry of every bundled platform.
///
/// Order is deterministic. Where two platforms declare overlapping hosts (Luther
/// under `chadwyck.com`), the more specific one is registered first so it wins
/// host detection.
#[must_use]
pub fn build_default_platform_registry() -> PlatformRegistry {
    let mut registry = PlatformRegistry::new();

    registry.register(Box::new(MitPressPlatform::new()));
    registry.register(Box::new(RscPlatform::new()));
    registry.register(Box::new(AnnualReviewsPlatform::new()));
    registry.register(Box::new(BioOnePlatform::new()));
    registry.register(Box::new(BrepolsPlatform::new()));
    registry.register(Box::new(CabiPlatform::new()));
    registry.register(Box::new(CairnPlatform::new()));
    registry.register(Box::new(LutherPlatform::new()));
    registry.register(Box::new(ChadwyckPlatform::new()));
    registry.register(Box::new(CnkiPlatform::new()));
    registry.register(Box::new(CqPressPlatform::new()));
    registry.register(Box::new(CambridgePlatform::new()));
    registry.register(Box::new(DukePressPlatform::new()));
    registry.register(Box::new(EbscoPlatform::new()));
    registry.register(Box::new(EiuPlatform::new()));
    registry.register(Box::new(ElgarPlatform::new()));
    registry.register(Box::new(GalileoPlatform::new()));
    registry.register(Box::new(IngentaPlatform::new()));
    registry.register(Box::new(InfowebPlatform::new()));
    registry.register(Box::new(OsaPlatform::new()));
    registry.register(Box::new(OupPlatform::new()));
    registry.register(Box::new(PalgravePlatform::new()));
    registry.register(Box::new(PhysiologyPlatform::new()));
    registry.register(Box::new(PressReaderPlatform::new()));
    registry.register(Box::new(ScopusPlatform::new()));
    registry.register(Box::new(SocialExplorerPlatform::new()));
    registry.register(Box::new(SwankPlatform::new()));
    registry.register(Box::new(ThiemePlatform::new()));
    registry.register(Box::new(TlgPlatform::new()));
    registry.register(Box::new(TransplantationProceedingsPlatform::new()));
    registry.register(Box::new(WorldBankPlatform::new()));
    registry.register(Box::new(WorldcatPlatform::new()));

    registry
}

/// Trait that all platforms implement.
///
/// A platform names itself, declares the hosts it serves and exposes its rule
/// table. Classification is provided on top of the rule table, so every platform
/// shares the same call shape and the same first-match-wins semantics.
pub trait Platform: Send + Sync {
    /// Returns the stable platform id (e.g., "mit", "cup", "ebscohost").
    fn id(&self) -> &'static str;

    /// Returns the human-readable platform name.
    fn name(&self) -> &'static str;

    /// Returns the host names this platform serves, used for host detection.
    fn hosts(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns the ordered rule table.
    fn rules(&self) -> &RuleSet;

    /// Classifies one access.
    ///
    /// An unrecognized URL yields an empty record, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MalformedInput`] when the URL has no pathname.
    fn classify(
        &self,
        url: &DecomposedUrl,
        access: &AccessRecord,
    ) -> Result<ResultRecord, ClassifyError> {
        self.rules().classify(url, access)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EXPECTED_ORDER: [&str; 32] = [
        "mit",
        "rsc",
        "ar",
        "bioone",
        "brepols",
        "cabi",
        "cairn",
        "luther",
        "chadwyck",
        "cnki",
        "cqp",
        "cup",
        "dukeupress",
        "ebscohost",
        "eiu",
        "elgar",
        "galileo",
        "ic",
        "infoweb",
        "osa",
        "oup",
        "palgrave-macmillan",
        "physiology",
        "pr",
        "scopus",
        "se",
        "swank",
        "thieme",
        "tlg",
        "tp",
        "worldbank",
        "worldcat",
    ];

    #[test]
    fn test_default_registry_order() {
        let registry = build_default_platform_registry();
        assert_eq!(registry.ids(), EXPECTED_ORDER);
    }

    #[test]
    fn test_rule_set_ids_match_platform_ids() {
        let registry = build_default_platform_registry();
        for platform in registry.platforms() {
            assert_eq!(platform.rules().platform(), platform.id());
            assert!(!platform.rules().rules().is_empty(), "{}", platform.id());
            assert!(!platform.hosts().is_empty(), "{}", platform.id());
        }
    }

    #[test]
    fn test_rule_names_unique_within_platform() {
        let registry = build_default_platform_registry();
        for platform in registry.platforms() {
            let mut names: Vec<&str> = platform.rules().rules().iter().map(Rule::name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate rule name in {}", platform.id());
        }
    }

    #[test]
    fn test_find_by_host_prefers_luther_over_chadwyck() {
        let registry = build_default_platform_registry();
        let found = registry.find_by_host("luther.chadwyck.com").unwrap();
        assert_eq!(found.id(), "luther");
        let found = registry.find_by_host("lion.chadwyck.com").unwrap();
        assert_eq!(found.id(), "chadwyck");
    }

    #[test]
    fn test_find_by_host_covers_subdomains() {
        let registry = build_default_platform_registry();
        let cases = [
            ("www.mitpressjournals.org", "mit"),
            ("petrology.oxfordjournals.org", "oup"),
            ("emory.on.worldcat.org", "worldcat"),
            ("blog.scopus.com", "scopus"),
        ];
        for (host, id) in cases {
            assert_eq!(registry.find_by_host(host).unwrap().id(), id, "{host}");
        }
        assert!(registry.find_by_host("example.org").is_none());
    }

    #[test]
    fn test_platform_classify_missing_pathname_is_structural() {
        let registry = build_default_platform_registry();
        let url = DecomposedUrl {
            pathname: None,
            ..DecomposedUrl::new("/")
        };
        let err = registry
            .get("mit")
            .unwrap()
            .classify(&url, &AccessRecord::new())
            .unwrap_err();
        assert!(err.is_structural());
    }
}
