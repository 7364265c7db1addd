//! Uniform classification entry point over any registered platform.

use tracing::debug;

use super::Platform;
use super::error::ClassifyError;
use crate::parser::DecomposedUrl;
use crate::record::{AccessRecord, ResultRecord};

/// Caller-controlled diagnostic output for classification calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Diagnostics {
    /// Only the engine's own trace-level events are emitted
    #[default]
    Off,
    /// Each call also logs its decomposed input and resulting record at debug level
    On,
}

impl From<bool> for Diagnostics {
    fn from(enabled: bool) -> Self {
        if enabled { Self::On } else { Self::Off }
    }
}

/// Callable classifier bound to one platform.
///
/// Forwards both arguments to the platform unchanged and hands its result,
/// error included, straight back to the caller.
#[derive(Clone, Copy)]
pub struct Classifier<'a> {
    platform: &'a dyn Platform,
    diagnostics: Diagnostics,
}

impl<'a> Classifier<'a> {
    /// Wraps a platform with diagnostics disabled.
    #[must_use]
    pub fn new(platform: &'a dyn Platform) -> Self {
        Self {
            platform,
            diagnostics: Diagnostics::Off,
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Returns the id of the wrapped platform.
    #[must_use]
    pub fn platform_id(&self) -> &'static str {
        self.platform.id()
    }

    #[must_use]
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Classifies one access.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ClassifyError`] the platform's rule set returns.
    #[tracing::instrument(level = "trace", skip_all, fields(platform = self.platform.id()))]
    pub fn classify(
        &self,
        url: &DecomposedUrl,
        access: &AccessRecord,
    ) -> Result<ResultRecord, ClassifyError> {
        if self.diagnostics == Diagnostics::On {
            debug!(
                pathname = ?url.pathname,
                query = ?url.query,
                hostname = %url.hostname,
                hash = ?url.hash,
                "Classifying"
            );
        }

        let record = self.platform.classify(url, access)?;

        if self.diagnostics == Diagnostics::On {
            debug!(record = ?record, "Classified");
        }
        Ok(record)
    }
}

impl std::fmt::Debug for Classifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("platform", &self.platform.id())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::LazyLock;

    use super::*;
    use crate::platform::rules::{Rule, RuleSet};
    use crate::record::{MimeType, ResourceType};

    static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
        RuleSet::new(
            "stub",
            vec![Rule::path("search", r"^/search$", |_, r| {
                r.set_kind(ResourceType::Search, MimeType::Html);
            })],
        )
    });

    struct StubPlatform;

    impl Platform for StubPlatform {
        fn id(&self) -> &'static str {
            "stub"
        }
        fn name(&self) -> &'static str {
            "Stub"
        }
        fn rules(&self) -> &RuleSet {
            &RULES
        }
    }

    #[test]
    fn test_diagnostics_default_off() {
        assert_eq!(Diagnostics::default(), Diagnostics::Off);
        assert_eq!(Diagnostics::from(true), Diagnostics::On);
        let classifier = Classifier::new(&StubPlatform);
        assert_eq!(classifier.diagnostics(), Diagnostics::Off);
    }

    #[test]
    fn test_classifier_forwards_result() {
        let classifier = Classifier::new(&StubPlatform).with_diagnostics(Diagnostics::On);
        let record = classifier
            .classify(&DecomposedUrl::new("/search"), &AccessRecord::new())
            .unwrap();
        assert_eq!(record.rtype, Some(ResourceType::Search));
        assert_eq!(classifier.platform_id(), "stub");
    }

    #[test]
    fn test_classifier_forwards_error_unchanged() {
        let classifier = Classifier::new(&StubPlatform);
        let err = classifier
            .classify(&DecomposedUrl::default(), &AccessRecord::new())
            .unwrap_err();
        assert_eq!(err, ClassifyError::missing_pathname("stub"));
    }
}
