//! Platform registry keyed by platform id.
//!
//! The [`PlatformRegistry`] owns every registered platform and hands out
//! [`Classifier`]s. Registration order is kept: it decides which platform wins
//! host detection when two platforms declare the same host.

use tracing::{debug, warn};

use super::dispatch::Classifier;
use super::error::ClassifyError;
use super::utils::host_within;
use super::Platform;
use crate::parser::DecomposedUrl;
use crate::record::{AccessRecord, ResultRecord};

/// Ordered collection of platforms.
pub struct PlatformRegistry {
    platforms: Vec<Box<dyn Platform>>,
}

impl PlatformRegistry {
    /// Creates an empty platform registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
        }
    }

    /// Registers a platform. A second platform with an already registered id is ignored.
    #[tracing::instrument(skip(self, platform), fields(platform_id))]
    pub fn register(&mut self, platform: Box<dyn Platform>) {
        tracing::Span::current().record("platform_id", platform.id());
        if self.get(platform.id()).is_some() {
            warn!(
                id = platform.id(),
                "Platform id already registered; keeping the first registration"
            );
            return;
        }
        debug!(
            id = platform.id(),
            name = platform.name(),
            rules = platform.rules().rules().len(),
            "Registering platform"
        );
        self.platforms.push(platform);
    }

    /// Returns the number of registered platforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Returns true if no platforms are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Returns the platform registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Platform> {
        self.platforms
            .iter()
            .find(|platform| platform.id() == id)
            .map(AsRef::as_ref)
    }

    /// Returns registered platforms in registration order.
    pub fn platforms(&self) -> impl Iterator<Item = &dyn Platform> {
        self.platforms.iter().map(AsRef::as_ref)
    }

    /// Returns registered ids in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.platforms.iter().map(|platform| platform.id()).collect()
    }

    /// Returns the first platform declaring `host` or one of its parent domains.
    #[must_use]
    pub fn find_by_host(&self, host: &str) -> Option<&dyn Platform> {
        let found = self
            .platforms
            .iter()
            .find(|platform| {
                platform
                    .hosts()
                    .iter()
                    .any(|declared| host_within(host, declared))
            })
            .map(AsRef::as_ref);
        debug!(host, platform = found.map(|p| p.id()), "Host lookup");
        found
    }

    /// Returns a classifier for the platform registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnknownPlatform`] if no platform has that id.
    pub fn classifier(&self, id: &str) -> Result<Classifier<'_>, ClassifyError> {
        self.get(id)
            .map(Classifier::new)
            .ok_or_else(|| ClassifyError::unknown_platform(id))
    }

    /// Classifies one access with the platform registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnknownPlatform`] for an unregistered id, or the
    /// platform's own error for structurally broken input.
    #[tracing::instrument(skip(self, url, access))]
    pub fn classify(
        &self,
        id: &str,
        url: &DecomposedUrl,
        access: &AccessRecord,
    ) -> Result<ResultRecord, ClassifyError> {
        self.classifier(id)?.classify(url, access)
    }
}

impl std::fmt::Debug for PlatformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformRegistry")
            .field("platform_count", &self.platforms.len())
            .field("platforms", &self.ids())
            .finish()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}
