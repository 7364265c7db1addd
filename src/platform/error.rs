//! Error types for classification and dispatch.
//!
//! An unrecognized URL is not an error: it yields an empty record. Errors here
//! signal a broken upstream contract or a dispatch request for an unknown platform.

use thiserror::Error;

/// Errors returned by platform classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The decomposed URL violates the input contract
    #[error("malformed input for platform '{platform}': {reason}\n  Suggestion: {suggestion}")]
    MalformedInput {
        /// Platform whose rule set rejected the input
        platform: String,
        /// What is structurally wrong
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// No platform is registered under the requested id
    #[error("no platform registered as '{platform}'\n  Suggestion: {suggestion}")]
    UnknownPlatform {
        /// The requested platform id
        platform: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ClassifyError {
    /// Creates a `MalformedInput` error for a decomposition without a pathname.
    #[must_use]
    pub fn missing_pathname(platform: &str) -> Self {
        Self::MalformedInput {
            platform: platform.to_string(),
            reason: "decomposed URL has no pathname".to_string(),
            suggestion: "Decompose the URL with a parser that always sets the path".to_string(),
        }
    }

    /// Creates an `UnknownPlatform` error.
    #[must_use]
    pub fn unknown_platform(platform: &str) -> Self {
        Self::UnknownPlatform {
            platform: platform.to_string(),
            suggestion: "Run with --list-platforms to see registered platform ids".to_string(),
        }
    }

    /// Returns true for errors caused by the input itself rather than dispatch.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}
